//! Word-search puzzle generation.
//!
//! [`PuzzleGenerator`] embeds every word of a [`WordSet`] into a square
//! [`LetterGrid`] along one of the eight directions and fills the remaining cells
//! with random letters. Generation is driven by a [`PuzzleSeed`], so a puzzle can
//! be reproduced exactly from its seed.
//!
//! [`WordSet`]: wordsearch_core::WordSet
//! [`LetterGrid`]: wordsearch_core::LetterGrid
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::WordSet;
//! use wordsearch_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let words = WordSet::parse(["computer", "keyboard", "mouse", "screen", "desk"])?;
//! let seed: PuzzleSeed =
//!     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef".parse()?;
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate_with_retries(12, &words, seed, 5)?;
//! for placement in &puzzle.placements {
//!     assert_eq!(puzzle.grid.read_word(&placement.line), Some(placement.word.clone()));
//! }
//! println!("{}", puzzle.grid);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{error::*, generator::*, seed::*};

mod error;
mod generator;
mod seed;
