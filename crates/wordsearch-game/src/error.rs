use wordsearch_core::WordError;
use wordsearch_generator::GeneratorError;

/// Errors that can occur during a game session.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GameError {
    /// A new puzzle could not be generated.
    #[display("failed to generate puzzle: {_0}")]
    Generator(GeneratorError),
    /// A target word could not be parsed.
    #[display("invalid word: {_0}")]
    InvalidWord(WordError),
    /// A selection was resolved against a puzzle that has since been replaced.
    #[display("selection belongs to puzzle generation {selection}, current is {current}")]
    #[from(ignore)]
    StaleSelection {
        /// Generation stamp the selection was resolved against.
        selection: u64,
        /// Generation stamp of the current puzzle.
        current: u64,
    },
    /// The requested predefined word set does not exist.
    #[display("unknown word set {index}")]
    #[from(ignore)]
    UnknownWordSet {
        /// The requested index.
        index: usize,
    },
}
