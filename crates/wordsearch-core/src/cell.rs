//! Grid coordinates.

use std::fmt::{self, Display};

use crate::Direction;

/// A cell coordinate on a square grid.
///
/// Cells carry no identity beyond their coordinates and compare by value. A cell
/// is valid in a grid of size `n` iff both `row` and `col` are below `n`; the
/// type itself does not know the grid size, so validity is always checked
/// against one with [`Cell::is_within`].
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Cell, Direction};
///
/// let cell = Cell::new(2, 3);
/// assert!(cell.is_within(10));
/// assert!(!cell.is_within(3));
///
/// assert_eq!(cell.step(Direction::DownRight, 2), Some(Cell::new(4, 5)));
/// assert_eq!(cell.step(Direction::Up, 3), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    /// Row index, counted from the top.
    pub row: u8,
    /// Column index, counted from the left.
    pub col: u8,
}

impl Cell {
    /// Creates a cell from a row and a column index.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns `true` if this cell lies inside a grid of the given size.
    #[must_use]
    pub const fn is_within(self, size: u8) -> bool {
        self.row < size && self.col < size
    }

    /// Returns the cell displaced by the given row and column deltas.
    ///
    /// Returns `None` if either coordinate would leave the `u8` range. The result
    /// is not checked against any grid size.
    #[must_use]
    pub fn offset(self, row_delta: i16, col_delta: i16) -> Option<Self> {
        let row = u8::try_from(i16::from(self.row) + row_delta).ok()?;
        let col = u8::try_from(i16::from(self.col) + col_delta).ok()?;
        Some(Self { row, col })
    }

    /// Returns the cell reached by moving `steps` times along `direction`.
    #[must_use]
    pub fn step(self, direction: Direction, steps: u8) -> Option<Self> {
        let (dr, dc) = direction.deltas();
        let steps = i16::from(steps);
        self.offset(i16::from(dr) * steps, i16::from(dc) * steps)
    }

    /// Returns an iterator over every cell of a grid of the given size in row-major order.
    pub fn all(size: u8) -> impl DoubleEndedIterator<Item = Self> + Clone {
        (0..size).flat_map(move |row| (0..size).map(move |col| Self { row, col }))
    }

    /// Returns the row-major index of this cell in a grid of the given size.
    ///
    /// The result is only meaningful when the cell [is within](Self::is_within)
    /// the grid.
    #[must_use]
    pub fn index(self, size: u8) -> usize {
        usize::from(self.row) * usize::from(size) + usize::from(self.col)
    }
}

impl From<(u8, u8)> for Cell {
    fn from((row, col): (u8, u8)) -> Self {
        Self { row, col }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
