//! Selection resolution: turning a drag gesture into a straight line of cells.

use crate::{Cell, Direction};

/// Reasons a drag gesture does not denote a selection line.
///
/// Neither is an error to the player; the gesture simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SelectionError {
    /// The endpoints are not on a common row, column or 45° diagonal.
    #[display("selection from {start} to {end} is not a straight line")]
    InvalidGeometry {
        /// Cell where the gesture started.
        start: Cell,
        /// Cell where the gesture ended.
        end: Cell,
    },
    /// The line would leave the grid before reaching its end cell.
    #[display("selection from {start} to {end} leaves the {size}x{size} grid")]
    OutOfBounds {
        /// Cell where the gesture started.
        start: Cell,
        /// Cell where the gesture ended.
        end: Cell,
        /// Size of the grid.
        size: u8,
    },
}

/// An ordered run of cells from a start to an end cell, inclusive.
///
/// Consecutive cells differ by exactly one fixed [`Direction`], and every cell lies
/// inside the grid the line was resolved against. A line always holds at least one
/// cell.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Cell, Direction, SelectionLine};
///
/// let line = SelectionLine::from_ray(Cell::new(4, 1), Direction::UpRight, 3, 10).unwrap();
/// assert_eq!(line.cells(), [Cell::new(4, 1), Cell::new(3, 2), Cell::new(2, 3)]);
/// assert_eq!(line.end(), Cell::new(2, 3));
/// assert_eq!(line.direction(), Some(Direction::UpRight));
///
/// // Leaving a 10x10 grid is not a line.
/// assert!(SelectionLine::from_ray(Cell::new(8, 8), Direction::Right, 3, 10).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionLine {
    cells: Vec<Cell>,
    direction: Option<Direction>,
}

impl SelectionLine {
    /// Builds the line of `len` cells starting at `start` and running along `direction`.
    ///
    /// Returns `None` if `len` is zero or if any cell would fall outside a grid of
    /// the given size. A one-cell line has no direction.
    #[must_use]
    pub fn from_ray(start: Cell, direction: Direction, len: usize, size: u8) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let steps = u8::try_from(len - 1).ok()?;
        let end = start.step(direction, steps)?;
        if !start.is_within(size) || !end.is_within(size) {
            return None;
        }

        // Both endpoints are inside and the grid is convex, so every step is too.
        let cells = (0..=steps)
            .map(|i| start.step(direction, i))
            .collect::<Option<Vec<_>>>()?;
        let direction = (len > 1).then_some(direction);
        Some(Self { cells, direction })
    }

    /// Returns the single-cell line at `cell`, or `None` if it lies outside the grid.
    #[must_use]
    pub fn single(cell: Cell, size: u8) -> Option<Self> {
        cell.is_within(size).then(|| Self {
            cells: vec![cell],
            direction: None,
        })
    }

    /// Returns the cells in visiting order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the first cell.
    #[must_use]
    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    /// Returns the last cell.
    #[must_use]
    pub fn end(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Returns the direction of travel, or `None` for a single-cell line.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a line holds at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if the line visits `cell`.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Returns the same cells visited in the opposite order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            cells: self.cells.iter().rev().copied().collect(),
            direction: self.direction.map(Direction::reverse),
        }
    }
}

/// Resolves a drag gesture from `start` to `end` on a grid of the given size.
///
/// The gesture is accepted when it is horizontal, vertical, or an exact 45°
/// diagonal; the returned line walks from `start` to `end` inclusive. A gesture
/// that starts and ends on the same cell resolves to that single cell.
///
/// This is a pure function, so front ends can call it on every hover event to
/// preview the candidate line.
///
/// # Errors
///
/// Returns [`SelectionError::InvalidGeometry`] if the endpoints are not co-linear
/// along one of the eight directions, and [`SelectionError::OutOfBounds`] if the
/// walk leaves the grid before reaching `end`.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Cell, SelectionError, resolve_selection};
///
/// let line = resolve_selection(10, Cell::new(0, 0), Cell::new(2, 2))?;
/// assert_eq!(line.cells(), [Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)]);
///
/// assert!(matches!(
///     resolve_selection(10, Cell::new(0, 0), Cell::new(2, 3)),
///     Err(SelectionError::InvalidGeometry { .. })
/// ));
/// # Ok::<(), SelectionError>(())
/// ```
pub fn resolve_selection(
    size: u8,
    start: Cell,
    end: Cell,
) -> Result<SelectionLine, SelectionError> {
    let row_delta = i16::from(end.row) - i16::from(start.row);
    let col_delta = i16::from(end.col) - i16::from(start.col);

    let out_of_bounds = SelectionError::OutOfBounds { start, end, size };

    let Some(direction) = Direction::from_deltas(row_delta, col_delta) else {
        return SelectionLine::single(start, size).ok_or(out_of_bounds);
    };

    if row_delta != 0 && col_delta != 0 && row_delta.abs() != col_delta.abs() {
        return Err(SelectionError::InvalidGeometry { start, end });
    }

    let len = usize::from(row_delta.unsigned_abs().max(col_delta.unsigned_abs())) + 1;
    SelectionLine::from_ray(start, direction, len, size).ok_or(out_of_bounds)
}
