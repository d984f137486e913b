//! Core data structures for word-search puzzles.
//!
//! This crate provides the value types shared by the generator, the game session
//! and any front end: grid coordinates, directions, letters, target words, the
//! letter grid itself, and the selection resolver that turns a drag gesture into a
//! straight line of cells.
//!
//! # Overview
//!
//! 1. **Coordinates** - [`Cell`] and [`Direction`] describe positions on a square
//!    grid and the eight unit directions words can run along.
//! 2. **Text** - [`Letter`], [`Word`] and [`WordSet`] hold validated uppercase
//!    ASCII text.
//! 3. **Grid** - [`LetterGrid`] is the immutable `size x size` matrix presented to
//!    the player.
//! 4. **Selection** - [`resolve_selection`] and [`SelectionLine`] convert two
//!    endpoint cells into an ordered line, or reject the gesture with a
//!    [`SelectionError`].
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::{Cell, LetterGrid};
//!
//! let grid: LetterGrid = "\
//! CAT
//! XOX
//! XXW
//! "
//! .parse()?;
//!
//! let line = grid.resolve(Cell::new(0, 0), Cell::new(2, 2))?;
//! assert_eq!(grid.read(&line), "COW");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cell;
pub mod direction;
pub mod grid;
pub mod letter;
pub mod selection;
pub mod word;

pub use self::{
    cell::Cell,
    direction::Direction,
    grid::{GridError, LetterGrid},
    letter::{Letter, LetterError},
    selection::{SelectionError, SelectionLine, resolve_selection},
    word::{Word, WordError, WordSet},
};
