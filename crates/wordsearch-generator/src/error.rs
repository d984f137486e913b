use wordsearch_core::Word;

/// Errors that can occur while generating a puzzle.
///
/// Every variant is recoverable: the caller either regenerates the whole grid
/// with a fresh seed or reduces the word list relative to the grid size. A grid
/// missing one of its words is never returned.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum GeneratorError {
    /// The word set has no words.
    #[display("no words to place")]
    EmptyWordSet,
    /// The grid size is zero.
    #[display("grid size must be at least 1")]
    InvalidSize,
    /// A word is longer than the grid is wide.
    #[display("word {word} ({len} letters) does not fit in a {size}x{size} grid", len = word.len())]
    GridTooSmall {
        /// Requested grid size.
        size: u8,
        /// The word that does not fit.
        word: Word,
    },
    /// A word could not be placed within the attempt budget.
    #[display("failed to place {word} after {attempts} attempts")]
    PlacementFailure {
        /// The word that could not be placed.
        word: Word,
        /// Number of attempts made.
        attempts: u32,
    },
}
