use wordsearch_core::{Cell, LetterGrid, SelectionError, SelectionLine, Word};
use wordsearch_generator::GeneratedPuzzle;

use crate::{
    GameError, MatchState, MatchTracker, Score, SelectionOutcome, TrackerState,
    view::{self, GridViewModel},
};

/// A word-search game session.
///
/// Owns the current puzzle, its match state and the drag-gesture tracker. Each
/// puzzle is tagged with a generation stamp that increases whenever the puzzle is
/// replaced, so a line resolved against an old grid can be told apart from one
/// resolved against the current grid.
///
/// # Example
///
/// ```
/// use wordsearch_core::WordSet;
/// use wordsearch_game::Game;
/// use wordsearch_generator::PuzzleGenerator;
///
/// let words = WordSet::parse(["CAT"])?;
/// let puzzle = PuzzleGenerator::new().generate(10, &words)?;
/// let placed = puzzle.placements[0].line.clone();
/// let mut game = Game::new(puzzle);
///
/// let outcome = game.select(placed.start(), placed.end());
/// assert!(outcome.is_matched());
/// assert!(game.is_complete());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    puzzle: GeneratedPuzzle,
    matches: MatchState,
    tracker: MatchTracker,
    generation: u64,
}

impl Game {
    /// Creates a new game session from a generated puzzle.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let matches = MatchState::new(puzzle.words.clone());
        Self {
            puzzle,
            matches,
            tracker: MatchTracker::new(),
            generation: 0,
        }
    }

    /// Replaces the puzzle, resetting the match state and any gesture in progress.
    ///
    /// Bumps the generation stamp, so lines resolved against the previous grid are
    /// rejected by [`Game::apply_line`].
    pub fn new_puzzle(&mut self, puzzle: GeneratedPuzzle) {
        self.matches = MatchState::new(puzzle.words.clone());
        self.tracker = MatchTracker::new();
        self.puzzle = puzzle;
        self.generation = self.generation.wrapping_add(1);
        log::info!(
            "new {0}x{0} puzzle with {1} words (generation {2}, seed {3})",
            self.puzzle.grid.size(),
            self.puzzle.words.len(),
            self.generation,
            self.puzzle.seed
        );
    }

    /// Returns the current puzzle.
    #[must_use]
    pub fn puzzle(&self) -> &GeneratedPuzzle {
        &self.puzzle
    }

    /// Returns the current letter grid.
    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.puzzle.grid
    }

    /// Returns the generation stamp of the current puzzle.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the match state.
    #[must_use]
    pub fn match_state(&self) -> &MatchState {
        &self.matches
    }

    /// Returns the gesture state.
    #[must_use]
    pub fn tracker_state(&self) -> &TrackerState {
        self.tracker.state()
    }

    /// Returns the cells of the line currently being dragged.
    #[must_use]
    pub fn selected_cells(&self) -> &[Cell] {
        self.tracker.selected_cells()
    }

    /// Starts a drag gesture at `cell`.
    pub fn press(&mut self, cell: Cell) {
        self.tracker.press(&self.puzzle.grid, cell);
    }

    /// Updates the drag preview for the pointer hovering over `cell`.
    pub fn hover(&mut self, cell: Cell) -> Option<&SelectionLine> {
        self.tracker.hover(&self.puzzle.grid, cell)
    }

    /// Ends the drag gesture at `cell` and checks the selected word.
    pub fn release(&mut self, cell: Cell) -> SelectionOutcome {
        let outcome = self
            .tracker
            .release(&self.puzzle.grid, &mut self.matches, cell);
        self.log_completion(&outcome);
        outcome
    }

    /// Abandons the drag gesture in progress.
    pub fn cancel(&mut self) {
        self.tracker.cancel();
    }

    /// Selects the line from `start` to `end` in one step.
    ///
    /// A gesture that leaves the grid or is not a straight line is rejected
    /// whichever endpoint is at fault, and any gesture in progress is dropped.
    pub fn select(&mut self, start: Cell, end: Cell) -> SelectionOutcome {
        if let Err(err) = self.resolve(start, end) {
            log::trace!("selection rejected: {err}");
            self.tracker.cancel();
            return SelectionOutcome::Rejected(err);
        }
        self.press(start);
        self.release(end)
    }

    /// Resolves a gesture against the current grid without changing any state.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectionError`] if the gesture is not a straight line inside
    /// the grid.
    pub fn resolve(&self, start: Cell, end: Cell) -> Result<SelectionLine, SelectionError> {
        self.puzzle.grid.resolve(start, end)
    }

    /// Applies a line resolved earlier against puzzle generation `generation`.
    ///
    /// Returns the matched word, if any.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StaleSelection`] without changing any state if the
    /// puzzle has been replaced since the line was resolved.
    pub fn apply_line(
        &mut self,
        generation: u64,
        line: &SelectionLine,
    ) -> Result<Option<Word>, GameError> {
        if generation != self.generation {
            log::debug!(
                "discarding selection from generation {generation}, current is {}",
                self.generation
            );
            return Err(GameError::StaleSelection {
                selection: generation,
                current: self.generation,
            });
        }
        let word = self.matches.apply_selection(&self.puzzle.grid, line);
        if word.is_some() && self.matches.is_complete() {
            log::info!("puzzle complete");
        }
        Ok(word)
    }

    /// Returns `true` once every target word has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matches.is_complete()
    }

    /// Returns the found/total counter.
    #[must_use]
    pub fn score(&self) -> Score {
        self.matches.score()
    }

    /// Returns an iterator over the words found so far.
    pub fn found_words(&self) -> impl Iterator<Item = &Word> {
        self.matches.found()
    }

    /// Returns an iterator over the words not yet found.
    pub fn remaining_words(&self) -> impl Iterator<Item = &Word> {
        self.matches.remaining()
    }

    /// Builds a render-ready snapshot of the board.
    #[must_use]
    pub fn view(&self) -> GridViewModel {
        view::build_grid_vm(self)
    }

    fn log_completion(&self, outcome: &SelectionOutcome) {
        if outcome.is_matched() && self.matches.is_complete() {
            log::info!("puzzle complete");
        }
    }
}
