use std::{
    collections::BTreeSet,
    fmt::{self, Display},
};

use wordsearch_core::{Cell, LetterGrid, SelectionLine, Word, WordSet};

/// Found-word counter shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Number of words found so far.
    pub found: usize,
    /// Number of target words.
    pub total: usize,
}

impl Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} out of {}", self.found, self.total)
    }
}

/// Which target words have been found, and where.
///
/// Created empty at puzzle start and mutated only by successful matches. The
/// remaining words are always derived as the targets minus the found words, so
/// the two can never disagree.
///
/// Matching inspects only the string spelled by a selection, never how the word
/// was placed: reading a target word along any direction finds it.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Cell, LetterGrid, WordSet};
/// use wordsearch_game::MatchState;
///
/// let grid: LetterGrid = "\
/// CAT
/// XOX
/// XXW
/// "
/// .parse()?;
/// let mut state = MatchState::new(WordSet::parse(["CAT", "COW"])?);
///
/// let line = grid.resolve(Cell::new(0, 0), Cell::new(0, 2))?;
/// assert_eq!(state.apply_selection(&grid, &line).map(|w| w.to_string()), Some("CAT".into()));
/// // Finding the same word again changes nothing.
/// assert_eq!(state.apply_selection(&grid, &line), None);
/// assert!(!state.is_complete());
///
/// let line = grid.resolve(Cell::new(0, 0), Cell::new(2, 2))?;
/// assert!(state.apply_selection(&grid, &line).is_some());
/// assert!(state.is_complete());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    targets: WordSet,
    found: BTreeSet<Word>,
    found_cells: BTreeSet<Cell>,
}

impl MatchState {
    /// Creates an empty match state for the given target words.
    #[must_use]
    pub fn new(targets: WordSet) -> Self {
        Self {
            targets,
            found: BTreeSet::new(),
            found_cells: BTreeSet::new(),
        }
    }

    /// Returns the target words.
    #[must_use]
    pub fn targets(&self) -> &WordSet {
        &self.targets
    }

    /// Returns an iterator over the words found so far, in alphabetical order.
    pub fn found(&self) -> impl Iterator<Item = &Word> {
        self.found.iter()
    }

    /// Returns an iterator over the target words not yet found.
    pub fn remaining(&self) -> impl Iterator<Item = &Word> {
        self.targets.iter().filter(|word| !self.found.contains(*word))
    }

    /// Returns `true` if `word` has been found.
    #[must_use]
    pub fn is_found(&self, word: &Word) -> bool {
        self.found.contains(word)
    }

    /// Returns the cells of every found word.
    #[must_use]
    pub fn found_cells(&self) -> &BTreeSet<Cell> {
        &self.found_cells
    }

    /// Returns `true` if `cell` belongs to a found word.
    #[must_use]
    pub fn is_found_cell(&self, cell: Cell) -> bool {
        self.found_cells.contains(&cell)
    }

    /// Returns the found/total counter.
    #[must_use]
    pub fn score(&self) -> Score {
        Score {
            found: self.found.len(),
            total: self.targets.len(),
        }
    }

    /// Returns `true` once every target word has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining().next().is_none()
    }

    /// Checks the word spelled by `line` against the remaining targets.
    ///
    /// On an exact, full-length match the word moves to the found set, the line's
    /// cells are marked as found, and the word is returned. Anything else,
    /// including a word that was already found, leaves the state untouched and
    /// returns `None`.
    pub fn apply_selection(&mut self, grid: &LetterGrid, line: &SelectionLine) -> Option<Word> {
        let candidate = grid.read_word(line)?;
        if !self.targets.contains(&candidate) {
            log::trace!("{candidate} is not a target word");
            return None;
        }
        if self.found.contains(&candidate) {
            log::trace!("{candidate} was already found");
            return None;
        }

        self.found.insert(candidate.clone());
        self.found_cells.extend(line.cells().iter().copied());
        log::info!("found {candidate} ({})", self.score());
        Some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> LetterGrid {
        "\
CATS
OXOX
WXXD
EGOD
"
        .parse()
        .unwrap()
    }

    fn words(list: &[&str]) -> WordSet {
        WordSet::parse(list).unwrap()
    }

    fn line(grid: &LetterGrid, start: (u8, u8), end: (u8, u8)) -> SelectionLine {
        grid.resolve(start.into(), end.into()).unwrap()
    }

    #[test]
    fn test_partial_match_does_not_count() {
        let grid = grid();
        let mut state = MatchState::new(words(&["CATS"]));
        assert_eq!(state.apply_selection(&grid, &line(&grid, (0, 0), (0, 2))), None);
        assert_eq!(state.score(), Score { found: 0, total: 1 });
        assert!(state.found_cells().is_empty());
    }

    #[test]
    fn test_match_marks_cells() {
        let grid = grid();
        let mut state = MatchState::new(words(&["CATS", "COW"]));
        let cow = line(&grid, (0, 0), (2, 0));
        assert_eq!(
            state.apply_selection(&grid, &cow),
            Some("COW".parse().unwrap())
        );
        for &cell in cow.cells() {
            assert!(state.is_found_cell(cell));
        }
        assert!(!state.is_found_cell(Cell::new(0, 1)));
        assert_eq!(state.remaining().count(), 1);
    }

    #[test]
    fn test_reverse_reading_matches() {
        let grid = grid();
        let mut state = MatchState::new(words(&["DOG"]));
        // Row 3 reads "EGOD"; "DOG" is spelled right to left.
        let dog = line(&grid, (3, 3), (3, 1));
        assert_eq!(state.apply_selection(&grid, &dog), Some("DOG".parse().unwrap()));
        assert!(state.is_complete());
    }

    #[test]
    fn test_repeat_match_is_noop() {
        let grid = grid();
        let mut state = MatchState::new(words(&["CATS", "COW"]));
        let cats = line(&grid, (0, 0), (0, 3));
        assert!(state.apply_selection(&grid, &cats).is_some());
        let before = state.clone();
        assert_eq!(state.apply_selection(&grid, &cats), None);
        assert_eq!(state.apply_selection(&grid, &cats.reversed()), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_completion_after_last_word() {
        let grid = grid();
        let mut state = MatchState::new(words(&["CATS", "COW", "DOG"]));
        assert!(state.apply_selection(&grid, &line(&grid, (0, 0), (0, 3))).is_some());
        assert!(state.apply_selection(&grid, &line(&grid, (0, 0), (2, 0))).is_some());
        assert!(!state.is_complete());
        assert_eq!(state.score().to_string(), "2 out of 3");
        assert!(state.apply_selection(&grid, &line(&grid, (3, 3), (3, 1))).is_some());
        assert!(state.is_complete());
        assert_eq!(state.remaining().count(), 0);
    }

    #[test]
    fn test_line_outside_grid_never_matches() {
        let grid = grid();
        let mut state = MatchState::new(words(&["CATS"]));
        let outside = SelectionLine::from_ray(
            Cell::new(6, 0),
            wordsearch_core::Direction::Right,
            4,
            10,
        )
        .unwrap();
        assert_eq!(state.apply_selection(&grid, &outside), None);
    }
}
