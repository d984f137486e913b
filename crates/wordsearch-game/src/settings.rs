use std::ops::RangeInclusive;

use wordsearch_core::WordSet;

use crate::{GameError, word_sets};

/// Grid sizes the settings screen accepts.
pub const GRID_SIZE_RANGE: RangeInclusive<u8> = 10..=20;
/// Font sizes the settings screen accepts.
pub const FONT_SIZE_RANGE: RangeInclusive<u8> = 10..=36;

/// Player-facing puzzle settings.
///
/// Out-of-range values are clamped rather than rejected. The font size is purely
/// cosmetic; the engine never reads it.
///
/// # Examples
///
/// ```
/// use wordsearch_game::GameSettings;
///
/// let settings = GameSettings::default().with_grid_size(42).with_font_size(4);
/// assert_eq!(settings.grid_size(), 20);
/// assert_eq!(settings.font_size(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    grid_size: u8,
    word_set: usize,
    font_size: u8,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_size: 10,
            word_set: 0,
            font_size: 20,
        }
    }
}

impl GameSettings {
    /// Returns the grid size.
    #[must_use]
    pub fn grid_size(&self) -> u8 {
        self.grid_size
    }

    /// Returns the index of the selected predefined word set.
    #[must_use]
    pub fn word_set(&self) -> usize {
        self.word_set
    }

    /// Returns the font size.
    #[must_use]
    pub fn font_size(&self) -> u8 {
        self.font_size
    }

    /// Sets the grid size, clamped to [`GRID_SIZE_RANGE`].
    #[must_use]
    pub fn with_grid_size(mut self, size: u8) -> Self {
        self.grid_size = size.clamp(*GRID_SIZE_RANGE.start(), *GRID_SIZE_RANGE.end());
        self
    }

    /// Selects a predefined word set by index.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownWordSet`] if no such set exists.
    pub fn with_word_set(mut self, index: usize) -> Result<Self, GameError> {
        if index >= word_sets::PREDEFINED.len() {
            return Err(GameError::UnknownWordSet { index });
        }
        self.word_set = index;
        Ok(self)
    }

    /// Sets the font size, clamped to [`FONT_SIZE_RANGE`].
    #[must_use]
    pub fn with_font_size(mut self, size: u8) -> Self {
        self.font_size = size.clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end());
        self
    }

    /// Returns the target words of the selected word set.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownWordSet`] if the selected set does not exist.
    pub fn words(&self) -> Result<WordSet, GameError> {
        word_sets::get(self.word_set)
    }
}
