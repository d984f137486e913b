use wordsearch_core::{Cell, LetterGrid, SelectionError, SelectionLine, Word};

use crate::MatchState;

/// Gesture state of a [`MatchTracker`].
#[derive(Debug, Default, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum TrackerState {
    /// No active selection.
    #[default]
    Idle,
    /// A start cell is pressed and the pointer is moving.
    Previewing {
        /// Cell where the gesture started.
        start: Cell,
        /// The line from `start` to the last hovered cell that resolved, if any.
        preview: Option<SelectionLine>,
    },
}

/// Result of releasing a gesture.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionOutcome {
    /// The selection spelled a remaining target word.
    Matched {
        /// The word that was found.
        word: Word,
        /// The selected cells.
        line: SelectionLine,
    },
    /// The selection was a valid line but spelled no remaining target word.
    NoMatch(SelectionLine),
    /// The gesture was not a straight line inside the grid.
    Rejected(SelectionError),
    /// A release arrived without a preceding press.
    Ignored,
}

/// Drag-gesture state machine feeding a [`MatchState`].
///
/// The tracker moves from [`TrackerState::Idle`] to [`TrackerState::Previewing`]
/// on [`press`](Self::press). Every [`hover`](Self::hover) re-resolves the candidate
/// line for preview without touching the match state. [`release`](Self::release)
/// resolves the final line, applies it to the match state, and returns to idle in
/// the same call.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Cell, LetterGrid, WordSet};
/// use wordsearch_game::{MatchState, MatchTracker, SelectionOutcome};
///
/// let grid: LetterGrid = "\
/// CAT
/// XOX
/// XXW
/// "
/// .parse()?;
/// let mut state = MatchState::new(WordSet::parse(["COW"])?);
/// let mut tracker = MatchTracker::new();
///
/// tracker.press(&grid, Cell::new(0, 0));
/// tracker.hover(&grid, Cell::new(1, 1));
/// assert_eq!(tracker.selected_cells(), [Cell::new(0, 0), Cell::new(1, 1)]);
///
/// let outcome = tracker.release(&grid, &mut state, Cell::new(2, 2));
/// assert!(matches!(outcome, SelectionOutcome::Matched { .. }));
/// assert!(tracker.state().is_idle());
/// assert!(state.is_complete());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MatchTracker {
    state: TrackerState,
}

impl MatchTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current gesture state.
    #[must_use]
    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Returns the cells of the current preview line, or an empty slice when idle.
    #[must_use]
    pub fn selected_cells(&self) -> &[Cell] {
        match &self.state {
            TrackerState::Previewing {
                preview: Some(line),
                ..
            } => line.cells(),
            _ => &[],
        }
    }

    /// Starts a gesture at `cell`.
    ///
    /// Pressing outside the grid leaves the tracker idle. Pressing while a gesture
    /// is in progress restarts it from `cell`.
    pub fn press(&mut self, grid: &LetterGrid, cell: Cell) {
        self.state = match SelectionLine::single(cell, grid.size()) {
            Some(line) => TrackerState::Previewing {
                start: cell,
                preview: Some(line),
            },
            None => TrackerState::Idle,
        };
    }

    /// Updates the preview for the pointer hovering over `cell`.
    ///
    /// A hover that does not resolve to a line keeps the last valid preview.
    /// Returns the current preview line.
    pub fn hover(&mut self, grid: &LetterGrid, cell: Cell) -> Option<&SelectionLine> {
        let TrackerState::Previewing { start, preview } = &mut self.state else {
            return None;
        };
        match grid.resolve(*start, cell) {
            Ok(line) => *preview = Some(line),
            Err(err) => log::trace!("hover preview rejected: {err}"),
        }
        preview.as_ref()
    }

    /// Ends the gesture at `cell` and applies the resolved line to `state`.
    ///
    /// The tracker is idle afterwards regardless of the outcome.
    pub fn release(
        &mut self,
        grid: &LetterGrid,
        state: &mut MatchState,
        cell: Cell,
    ) -> SelectionOutcome {
        let TrackerState::Previewing { start, .. } = std::mem::take(&mut self.state) else {
            return SelectionOutcome::Ignored;
        };

        let line = match grid.resolve(start, cell) {
            Ok(line) => line,
            Err(err) => {
                log::trace!("selection rejected: {err}");
                return SelectionOutcome::Rejected(err);
            }
        };
        match state.apply_selection(grid, &line) {
            Some(word) => SelectionOutcome::Matched { word, line },
            None => SelectionOutcome::NoMatch(line),
        }
    }

    /// Abandons the current gesture, for example when the pointer leaves the board.
    pub fn cancel(&mut self) {
        self.state = TrackerState::Idle;
    }
}
