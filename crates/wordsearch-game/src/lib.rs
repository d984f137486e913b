//! Game session management for word-search puzzles.
//!
//! # Overview
//!
//! A [`Game`] owns one generated puzzle and everything that changes while it is
//! played:
//!
//! - [`MatchState`] records which target words have been found and which cells
//!   they cover.
//! - [`MatchTracker`] turns press/hover/release pointer events into selection
//!   lines and feeds them to the match state.
//! - [`GridViewModel`] is a render-ready snapshot of the board.
//!
//! [`GameFactory`] builds games from [`GameSettings`] and one of the
//! [`word_sets::PREDEFINED`] lists, retrying generation when a word cannot be
//! placed.
//!
//! # Examples
//!
//! ```
//! use wordsearch_game::{GameFactory, GameSettings, SelectionOutcome};
//!
//! let settings = GameSettings::default().with_word_set(2)?;
//! let mut game = GameFactory::new().create_from_settings(&settings)?;
//!
//! let placements = game.puzzle().placements.clone();
//! for placement in &placements {
//!     let outcome = game.select(placement.line.start(), placement.line.end());
//!     assert!(matches!(outcome, SelectionOutcome::Matched { .. }));
//! }
//! assert!(game.is_complete());
//! assert_eq!(game.score().to_string(), "5 out of 5");
//! # Ok::<(), wordsearch_game::GameError>(())
//! ```

pub use self::{
    error::GameError,
    factory::{DEFAULT_REGENERATIONS, GameFactory},
    game::Game,
    match_state::{MatchState, Score},
    settings::{FONT_SIZE_RANGE, GRID_SIZE_RANGE, GameSettings},
    tracker::{MatchTracker, SelectionOutcome, TrackerState},
    view::{CellMarks, CellView, GridViewModel, WordStatus},
};

mod error;
mod factory;
mod game;
mod match_state;
mod settings;
mod tracker;
mod view;
pub mod word_sets;
