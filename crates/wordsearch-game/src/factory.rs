use wordsearch_core::WordSet;
use wordsearch_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

use crate::{Game, GameError, GameSettings};

/// Default number of whole-grid regenerations after a placement failure.
pub const DEFAULT_REGENERATIONS: usize = 10;

/// Creates games from settings, regenerating grids that fail to place a word.
///
/// # Example
///
/// ```
/// use wordsearch_game::{GameFactory, GameSettings};
///
/// let factory = GameFactory::new();
/// let game = factory.create_from_settings(&GameSettings::default().with_grid_size(12))?;
/// assert_eq!(game.grid().size(), 12);
/// assert_eq!(game.score().total, 5);
/// # Ok::<(), wordsearch_game::GameError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GameFactory {
    generator: PuzzleGenerator,
    regenerations: usize,
}

impl Default for GameFactory {
    fn default() -> Self {
        Self {
            generator: PuzzleGenerator::new(),
            regenerations: DEFAULT_REGENERATIONS,
        }
    }
}

impl GameFactory {
    /// Creates a factory with the default generator and regeneration budget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory with the given generator and regeneration budget.
    #[must_use]
    pub fn with_generator(generator: PuzzleGenerator, regenerations: usize) -> Self {
        Self {
            generator,
            regenerations,
        }
    }

    /// Generates a puzzle for `words` on a `size x size` grid.
    ///
    /// A random seed is drawn when `seed` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Generator`] if the words cannot be placed within the
    /// regeneration budget.
    pub fn puzzle(
        &self,
        size: u8,
        words: &WordSet,
        seed: Option<PuzzleSeed>,
    ) -> Result<GeneratedPuzzle, GameError> {
        let seed = seed.unwrap_or_else(PuzzleSeed::random);
        let puzzle = self
            .generator
            .generate_with_retries(size, words, seed, self.regenerations)?;
        Ok(puzzle)
    }

    /// Creates a game for `words` on a `size x size` grid.
    ///
    /// # Errors
    ///
    /// See [`GameFactory::puzzle`].
    pub fn create(
        &self,
        size: u8,
        words: &WordSet,
        seed: Option<PuzzleSeed>,
    ) -> Result<Game, GameError> {
        Ok(Game::new(self.puzzle(size, words, seed)?))
    }

    /// Creates a game from player settings with a random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownWordSet`] for an invalid word set, or
    /// [`GameError::Generator`] if generation fails.
    pub fn create_from_settings(&self, settings: &GameSettings) -> Result<Game, GameError> {
        self.create(settings.grid_size(), &settings.words()?, None)
    }
}

#[cfg(test)]
mod tests {
    use wordsearch_generator::{GeneratorConfig, GeneratorError};

    use super::*;

    fn seed() -> Option<PuzzleSeed> {
        Some(
            "fedcba0987654321fedcba0987654321fedcba0987654321fedcba0987654321"
                .parse()
                .unwrap(),
        )
    }

    #[test]
    fn test_seeded_games_are_reproducible() {
        let words = WordSet::parse(["APPLE", "BANANA", "CHERRY"]).unwrap();
        let factory = GameFactory::new();
        let a = factory.create(10, &words, seed()).unwrap();
        let b = factory.create(10, &words, seed()).unwrap();
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.generation(), 0);
    }

    #[test]
    fn test_surfaces_placement_failure() {
        let generator = PuzzleGenerator::with_config(GeneratorConfig { max_attempts: 5 });
        let factory = GameFactory::with_generator(generator, 1);
        let words = WordSet::parse(["AAAAA", "BBBBB", "CCCCC", "DDDDD", "EEEEE", "FFFFF"]).unwrap();
        let err = factory.create(5, &words, seed()).unwrap_err();
        assert!(matches!(
            err,
            GameError::Generator(GeneratorError::PlacementFailure { .. })
        ));
    }

    #[test]
    fn test_create_from_settings() {
        let settings = GameSettings::default().with_word_set(1).unwrap();
        let game = GameFactory::new().create_from_settings(&settings).unwrap();
        assert_eq!(game.grid().size(), 10);
        assert!(
            game.match_state()
                .targets()
                .contains(&"ELEPHANT".parse().unwrap())
        );
    }
}
