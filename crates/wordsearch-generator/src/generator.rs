use std::cmp::Reverse;

use rand::{Rng, RngExt as _};
use wordsearch_core::{Cell, Direction, Letter, LetterGrid, SelectionLine, Word, WordSet};

use crate::{GeneratorError, PuzzleSeed};

/// Default number of random placement attempts per word.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Tuning knobs for [`PuzzleGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Random placement attempts per word before giving up with
    /// [`GeneratorError::PlacementFailure`].
    pub max_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Where a word ended up in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The placed word.
    pub word: Word,
    /// The cells holding the word's letters, in reading order.
    pub line: SelectionLine,
}

/// A generated puzzle: the grid together with how it was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The fully populated letter grid.
    pub grid: LetterGrid,
    /// The target words, each placed exactly once.
    pub words: WordSet,
    /// One placement per target word, in placement order.
    pub placements: Vec<Placement>,
    /// The seed this puzzle was generated from.
    pub seed: PuzzleSeed,
}

impl GeneratedPuzzle {
    /// Returns the placement record for `word`, if it is a target word.
    #[must_use]
    pub fn placement(&self, word: &Word) -> Option<&Placement> {
        self.placements.iter().find(|p| &p.word == word)
    }
}

/// Word-search grid generator.
///
/// Each word is placed by randomized restarts: a uniformly random direction and
/// start cell are drawn, and the placement is accepted if the word fits inside the
/// grid and every covered cell is either empty or already holds the letter the word
/// needs there. Crossing words therefore share letters. After all words are placed
/// the remaining cells are filled with uniformly random letters.
///
/// Words are placed one at a time, longest first with ties in [`WordSet`] order,
/// each reading the letters committed by the words before it.
///
/// # Examples
///
/// ```
/// use wordsearch_core::WordSet;
/// use wordsearch_generator::PuzzleGenerator;
///
/// let words = WordSet::parse(["lion", "tiger", "bear"])?;
/// let puzzle = PuzzleGenerator::new().generate(10, &words)?;
///
/// assert_eq!(puzzle.grid.size(), 10);
/// for word in &words {
///     assert!(puzzle.grid.find_word(word).is_some());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the generator configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a puzzle from a freshly drawn random seed.
    ///
    /// # Errors
    ///
    /// See [`PuzzleGenerator::generate_with_seed`].
    pub fn generate(
        &self,
        size: u8,
        words: &WordSet,
    ) -> Result<GeneratedPuzzle, GeneratorError> {
        self.generate_with_seed(size, words, PuzzleSeed::random())
    }

    /// Generates a puzzle deterministically from `seed`.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::InvalidSize`] if `size` is zero.
    /// - [`GeneratorError::EmptyWordSet`] if `words` is empty.
    /// - [`GeneratorError::GridTooSmall`] if a word is longer than `size`.
    /// - [`GeneratorError::PlacementFailure`] for the first word that could not be
    ///   placed within [`GeneratorConfig::max_attempts`]. The partial grid is
    ///   discarded.
    pub fn generate_with_seed(
        &self,
        size: u8,
        words: &WordSet,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GeneratorError> {
        validate(size, words)?;

        let mut rng = seed.rng();
        let mut board = Board::new(size);
        let mut placements = Vec::with_capacity(words.len());
        for word in placement_order(words) {
            let line = self.place_word(&mut board, word, &mut rng)?;
            placements.push(Placement {
                word: word.clone(),
                line,
            });
        }

        let grid = LetterGrid::from_fn(size, |cell| {
            board.get(cell).unwrap_or_else(|| random_letter(&mut rng))
        });

        Ok(GeneratedPuzzle {
            grid,
            words: words.clone(),
            placements,
            seed,
        })
    }

    /// Generates a puzzle, regenerating from scratch after a placement failure.
    ///
    /// Up to `regenerations` further attempts are made after the first, each with
    /// the seed derived by [`PuzzleSeed::next`].
    ///
    /// # Errors
    ///
    /// Returns the validation error immediately, or the last
    /// [`GeneratorError::PlacementFailure`] once every attempt has failed.
    pub fn generate_with_retries(
        &self,
        size: u8,
        words: &WordSet,
        seed: PuzzleSeed,
        regenerations: usize,
    ) -> Result<GeneratedPuzzle, GeneratorError> {
        let mut seed = seed;
        let mut remaining = regenerations;
        loop {
            match self.generate_with_seed(size, words, seed) {
                Err(err @ GeneratorError::PlacementFailure { .. }) if remaining > 0 => {
                    log::warn!("{err}; regenerating ({remaining} regeneration(s) left)");
                    remaining -= 1;
                    seed = seed.next();
                }
                result => return result,
            }
        }
    }

    fn place_word<R>(
        &self,
        board: &mut Board,
        word: &Word,
        rng: &mut R,
    ) -> Result<SelectionLine, GeneratorError>
    where
        R: Rng,
    {
        let size = board.size;
        for attempt in 1..=self.config.max_attempts {
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            let start = Cell::new(rng.random_range(0..size), rng.random_range(0..size));

            let Some(line) = SelectionLine::from_ray(start, direction, word.len(), size) else {
                continue;
            };
            if !board.fits(&line, word) {
                continue;
            }

            board.write(&line, word);
            log::debug!("placed {word} at {start} going {direction} (attempt {attempt})");
            return Ok(line);
        }

        log::warn!(
            "failed to place {word} in a {size}x{size} grid after {} attempts",
            self.config.max_attempts
        );
        Err(GeneratorError::PlacementFailure {
            word: word.clone(),
            attempts: self.config.max_attempts,
        })
    }
}

/// Longest words first; the sort is stable, so equal lengths keep set order.
fn placement_order(words: &WordSet) -> Vec<&Word> {
    let mut order = words.iter().collect::<Vec<_>>();
    order.sort_by_key(|word| Reverse(word.len()));
    order
}

fn random_letter<R>(rng: &mut R) -> Letter
where
    R: Rng,
{
    Letter::ALPHABET[rng.random_range(0..Letter::ALPHABET.len())]
}

fn validate(size: u8, words: &WordSet) -> Result<(), GeneratorError> {
    if size == 0 {
        return Err(GeneratorError::InvalidSize);
    }
    if words.is_empty() {
        return Err(GeneratorError::EmptyWordSet);
    }
    if let Some(word) = words.iter().find(|word| word.len() > usize::from(size)) {
        return Err(GeneratorError::GridTooSmall {
            size,
            word: word.clone(),
        });
    }
    Ok(())
}

/// The grid under construction; `None` marks a cell no word has claimed yet.
#[derive(Debug)]
struct Board {
    size: u8,
    cells: Vec<Option<Letter>>,
}

impl Board {
    fn new(size: u8) -> Self {
        Self {
            size,
            cells: vec![None; usize::from(size) * usize::from(size)],
        }
    }

    fn get(&self, cell: Cell) -> Option<Letter> {
        self.cells[cell.index(self.size)]
    }

    fn fits(&self, line: &SelectionLine, word: &Word) -> bool {
        line.cells()
            .iter()
            .zip(word.letters())
            .all(|(&cell, &letter)| self.get(cell).is_none_or(|existing| existing == letter))
    }

    fn write(&mut self, line: &SelectionLine, word: &Word) {
        for (&cell, &letter) in line.cells().iter().zip(word.letters()) {
            self.cells[cell.index(self.size)] = Some(letter);
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SEED: &str = "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3";

    fn seed() -> PuzzleSeed {
        SEED.parse().unwrap()
    }

    fn words(list: &[&str]) -> WordSet {
        WordSet::parse(list).unwrap()
    }

    fn assert_well_formed(puzzle: &GeneratedPuzzle) {
        assert_eq!(puzzle.placements.len(), puzzle.words.len());
        for placement in &puzzle.placements {
            assert!(puzzle.words.contains(&placement.word));
            assert_eq!(puzzle.grid.read_word(&placement.line).as_ref(), Some(&placement.word));
        }
        for word in &puzzle.words {
            assert!(puzzle.grid.find_word(word).is_some(), "{word} not found");
        }
    }

    #[test]
    fn test_generate_places_every_word() {
        let words = words(&["APPLE", "BANANA", "CHERRY", "DATE", "ELDERBERRY"]);
        let puzzle = PuzzleGenerator::new()
            .generate_with_seed(15, &words, seed())
            .unwrap();
        assert_well_formed(&puzzle);
        assert_eq!(puzzle.seed, seed());
    }

    #[test]
    fn test_generate_is_deterministic_for_a_seed() {
        let words = words(&["LION", "TIGER", "BEAR", "CUB", "ELEPHANT"]);
        let generator = PuzzleGenerator::new();
        let a = generator.generate_with_seed(12, &words, seed()).unwrap();
        let b = generator.generate_with_seed(12, &words, seed()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_cell_grid() {
        let words = words(&["Q"]);
        let puzzle = PuzzleGenerator::new()
            .generate_with_seed(1, &words, seed())
            .unwrap();
        assert_eq!(puzzle.grid.to_string(), "Q\n");
        assert_eq!(puzzle.placements[0].line.direction(), None);
    }

    #[test]
    fn test_word_filling_whole_row_or_column() {
        let words = words(&["ABCDE"]);
        let puzzle = PuzzleGenerator::new()
            .generate_with_seed(5, &words, seed())
            .unwrap();
        assert_well_formed(&puzzle);
        let line = &puzzle.placements[0].line;
        assert_eq!(line.len(), 5);
    }

    #[test]
    fn test_validation_errors() {
        let generator = PuzzleGenerator::new();
        assert_eq!(
            generator.generate_with_seed(0, &words(&["A"]), seed()),
            Err(GeneratorError::InvalidSize)
        );
        assert_eq!(
            generator.generate_with_seed(10, &WordSet::new(), seed()),
            Err(GeneratorError::EmptyWordSet)
        );
        assert_eq!(
            generator.generate_with_seed(5, &words(&["CAT", "KEYBOARD"]), seed()),
            Err(GeneratorError::GridTooSmall {
                size: 5,
                word: "KEYBOARD".parse().unwrap(),
            })
        );
    }

    #[test]
    fn test_placement_failure_is_reported() {
        // Six disjoint five-letter words cannot share cells and need 30 of 25.
        let words = words(&["AAAAA", "BBBBB", "CCCCC", "DDDDD", "EEEEE", "FFFFF"]);
        let generator = PuzzleGenerator::with_config(GeneratorConfig { max_attempts: 50 });
        let err = generator.generate_with_seed(5, &words, seed()).unwrap_err();
        assert!(err.is_placement_failure());
        assert!(matches!(err, GeneratorError::PlacementFailure { attempts: 50, .. }));
    }

    #[test]
    fn test_retries_return_last_failure() {
        let words = words(&["AAAAA", "BBBBB", "CCCCC", "DDDDD", "EEEEE", "FFFFF"]);
        let generator = PuzzleGenerator::with_config(GeneratorConfig { max_attempts: 10 });
        let err = generator
            .generate_with_retries(5, &words, seed(), 3)
            .unwrap_err();
        assert!(err.is_placement_failure());
    }

    #[test]
    fn test_retries_skip_validation_errors() {
        let err = PuzzleGenerator::new()
            .generate_with_retries(3, &words(&["ELEPHANT"]), seed(), 5)
            .unwrap_err();
        assert!(err.is_grid_too_small());
    }

    #[test]
    fn test_retries_succeed_when_first_seed_works() {
        let words = words(&["COMPUTER", "KEYBOARD", "MOUSE", "SCREEN", "DESK"]);
        let generator = PuzzleGenerator::new();
        let direct = generator.generate_with_seed(15, &words, seed()).unwrap();
        let retried = generator
            .generate_with_retries(15, &words, seed(), 3)
            .unwrap();
        assert_eq!(direct, retried);
    }

    #[test]
    fn test_longest_words_are_placed_first() {
        let words = words(&["DATE", "APPLE", "ELDERBERRY", "BANANA", "CHERRY"]);
        let puzzle = PuzzleGenerator::new()
            .generate_with_retries(10, &words, seed(), 10)
            .unwrap();
        let order = puzzle
            .placements
            .iter()
            .map(|placement| placement.word.to_string())
            .collect::<Vec<_>>();
        assert_eq!(order, ["ELDERBERRY", "BANANA", "CHERRY", "APPLE", "DATE"]);
    }

    #[test]
    fn test_board_accepts_same_letter_overlap_only() {
        let mut board = Board::new(5);
        let cat: Word = "CAT".parse().unwrap();
        let row = SelectionLine::from_ray(Cell::new(0, 0), Direction::Right, 3, 5).unwrap();
        board.write(&row, &cat);

        // "TOP" going down from the `T` of "CAT" shares that letter.
        let top: Word = "TOP".parse().unwrap();
        let column = SelectionLine::from_ray(Cell::new(0, 2), Direction::Down, 3, 5).unwrap();
        assert!(board.fits(&column, &top));

        // "SOP" would overwrite the `T`.
        let sop: Word = "SOP".parse().unwrap();
        assert!(!board.fits(&column, &sop));

        board.write(&column, &top);
        assert_eq!(board.get(Cell::new(0, 2)).map(Letter::as_char), Some('T'));
        assert_eq!(board.get(Cell::new(2, 2)).map(Letter::as_char), Some('P'));
        assert_eq!(board.get(Cell::new(4, 4)), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_generated_grids_contain_every_word(
            bytes in any::<[u8; 32]>(),
            size in 10u8..=20,
            set in 0usize..3,
        ) {
            let list: &[&str] = match set {
                0 => &["APPLE", "BANANA", "CHERRY", "DATE", "ELDERBERRY"],
                1 => &["LION", "TIGER", "BEAR", "CUB", "ELEPHANT"],
                _ => &["COMPUTER", "KEYBOARD", "MOUSE", "SCREEN", "DESK"],
            };
            let words = words(list);
            let result = PuzzleGenerator::new()
                .generate_with_seed(size, &words, PuzzleSeed::from_bytes(bytes));
            match result {
                Ok(puzzle) => {
                    prop_assert_eq!(puzzle.grid.size(), size);
                    prop_assert_eq!(puzzle.grid.rows().len(), usize::from(size));
                    for row in puzzle.grid.rows() {
                        prop_assert_eq!(row.len(), usize::from(size));
                    }
                    assert_well_formed(&puzzle);
                }
                Err(err) => prop_assert!(err.is_placement_failure()),
            }
        }
    }
}
