//! Predefined word lists offered by the settings screen.

use wordsearch_core::WordSet;

use crate::GameError;

/// A named list of target words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordList {
    /// Display name.
    pub name: &'static str,
    /// The words, uppercase.
    pub words: &'static [&'static str],
}

/// The word lists the player can choose from.
pub const PREDEFINED: [WordList; 3] = [
    WordList {
        name: "Fruits",
        words: &["APPLE", "BANANA", "CHERRY", "DATE", "ELDERBERRY"],
    },
    WordList {
        name: "Animals",
        words: &["LION", "TIGER", "BEAR", "CUB", "ELEPHANT"],
    },
    WordList {
        name: "Computer",
        words: &["COMPUTER", "KEYBOARD", "MOUSE", "SCREEN", "DESK"],
    },
];

/// Returns the predefined word set at `index`.
///
/// # Errors
///
/// Returns [`GameError::UnknownWordSet`] if there is no list at `index`.
pub fn get(index: usize) -> Result<WordSet, GameError> {
    let list = PREDEFINED
        .get(index)
        .ok_or(GameError::UnknownWordSet { index })?;
    Ok(WordSet::parse(list.words)?)
}
