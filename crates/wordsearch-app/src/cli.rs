use clap::Parser;
use wordsearch_core::{WordError, WordSet};
use wordsearch_game::{DEFAULT_REGENERATIONS, GameError, GameFactory, GameSettings};
use wordsearch_generator::{DEFAULT_MAX_ATTEMPTS, GeneratorConfig, PuzzleGenerator, PuzzleSeed};

/// Find the hidden words by dragging across the grid, one command per line.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Grid size (rows and columns), clamped to 10..=20.
    #[arg(long, default_value_t = 10)]
    pub size: u8,

    /// Index of the predefined word set (0: fruits, 1: animals, 2: computer).
    #[arg(long, value_name = "INDEX", default_value_t = 0)]
    pub word_set: usize,

    /// Target words, overriding the predefined word set.
    #[arg(long, value_name = "WORD", num_args = 1..)]
    pub words: Vec<String>,

    /// Seed of the first puzzle (64 hex digits). Random if omitted.
    #[arg(long, value_name = "HEX")]
    pub seed: Option<PuzzleSeed>,

    /// Font size setting, clamped to 10..=36. The terminal board ignores it.
    #[arg(long, default_value_t = GameSettings::default().font_size())]
    pub font_size: u8,

    /// Placement attempts per word.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    /// Whole-grid regenerations after a word could not be placed.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_REGENERATIONS)]
    pub regenerations: usize,
}

#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ConfigError {
    #[display("{_0}")]
    Game(GameError),
    #[display("invalid word: {_0}")]
    Word(WordError),
}

/// Resolved startup configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub size: u8,
    pub font_size: u8,
    pub words: WordSet,
    pub seed: Option<PuzzleSeed>,
    pub factory: GameFactory,
}

impl Args {
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let settings = GameSettings::default()
            .with_grid_size(self.size)
            .with_font_size(self.font_size)
            .with_word_set(self.word_set)?;
        let words = if self.words.is_empty() {
            settings.words()?
        } else {
            WordSet::parse(&self.words)?
        };
        let generator = PuzzleGenerator::with_config(GeneratorConfig {
            max_attempts: self.max_attempts,
        });
        Ok(Config {
            size: settings.grid_size(),
            font_size: settings.font_size(),
            words,
            seed: self.seed,
            factory: GameFactory::with_generator(generator, self.regenerations),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("wordsearch").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).into_config().unwrap();
        assert_eq!(config.size, 10);
        assert_eq!(config.font_size, 20);
        assert_eq!(config.words, GameSettings::default().words().unwrap());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_custom_words_override_word_set() {
        let config = parse(&["--word-set", "2", "--words", "owl", "bat", "--size", "99"])
            .into_config()
            .unwrap();
        assert_eq!(config.size, 20);
        assert_eq!(config.words, WordSet::parse(["BAT", "OWL"]).unwrap());
    }

    #[test]
    fn test_font_size_is_clamped() {
        assert_eq!(parse(&["--font-size", "28"]).into_config().unwrap().font_size, 28);
        assert_eq!(parse(&["--font-size", "4"]).into_config().unwrap().font_size, 10);
        assert_eq!(parse(&["--font-size", "99"]).into_config().unwrap().font_size, 36);
    }

    #[test]
    fn test_seed_flag() {
        let hex = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff";
        let config = parse(&["--seed", hex]).into_config().unwrap();
        assert_eq!(config.seed.map(|seed| seed.to_string()).as_deref(), Some(hex));
        assert!(Args::try_parse_from(["wordsearch", "--seed", "xyz"]).is_err());
    }

    #[test]
    fn test_invalid_configuration() {
        assert_eq!(
            parse(&["--word-set", "7"]).into_config().unwrap_err(),
            ConfigError::Game(GameError::UnknownWordSet { index: 7 })
        );
        assert!(matches!(
            parse(&["--words", "bad-word"]).into_config(),
            Err(ConfigError::Word(_))
        ));
    }
}
