//! The eight straight-line directions of a word-search grid.

use std::fmt::{self, Display};

/// One of the eight unit vectors words can run along.
///
/// Deltas are expressed as `(row_delta, col_delta)`, with rows growing downwards
/// and columns growing to the right.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Direction;
///
/// assert_eq!(Direction::ALL.len(), 8);
/// assert_eq!(Direction::UpRight.deltas(), (-1, 1));
/// assert_eq!(Direction::from_deltas(-4, 4), Some(Direction::UpRight));
/// assert_eq!(Direction::from_deltas(0, 0), None);
/// assert_eq!(Direction::UpRight.reverse(), Direction::DownLeft);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// `(0, 1)`
    Right,
    /// `(1, 0)`
    Down,
    /// `(1, 1)`
    DownRight,
    /// `(-1, 1)`
    UpRight,
    /// `(0, -1)`
    Left,
    /// `(-1, 0)`
    Up,
    /// `(-1, -1)`
    UpLeft,
    /// `(1, -1)`
    DownLeft,
}

impl Direction {
    /// Array containing all eight directions.
    ///
    /// The order is fixed; the generator samples an index into this array.
    pub const ALL: [Self; 8] = [
        Self::Right,
        Self::Down,
        Self::DownRight,
        Self::UpRight,
        Self::Left,
        Self::Up,
        Self::UpLeft,
        Self::DownLeft,
    ];

    /// Returns the `(row_delta, col_delta)` unit vector of this direction.
    #[must_use]
    pub const fn deltas(self) -> (i8, i8) {
        match self {
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::DownRight => (1, 1),
            Self::UpRight => (-1, 1),
            Self::Left => (0, -1),
            Self::Up => (-1, 0),
            Self::UpLeft => (-1, -1),
            Self::DownLeft => (1, -1),
        }
    }

    /// Returns the direction pointing along the signs of the given deltas.
    ///
    /// Only the signs are inspected, so `(3, -7)` maps to [`Direction::DownLeft`]
    /// even though it is not a true diagonal. Returns `None` for `(0, 0)`.
    #[must_use]
    pub fn from_deltas(row_delta: i16, col_delta: i16) -> Option<Self> {
        let direction = match (row_delta.signum(), col_delta.signum()) {
            (0, 1) => Self::Right,
            (1, 0) => Self::Down,
            (1, 1) => Self::DownRight,
            (-1, 1) => Self::UpRight,
            (0, -1) => Self::Left,
            (-1, 0) => Self::Up,
            (-1, -1) => Self::UpLeft,
            (1, -1) => Self::DownLeft,
            _ => return None,
        };
        Some(direction)
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::DownRight => Self::UpLeft,
            Self::UpRight => Self::DownLeft,
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::UpLeft => Self::DownRight,
            Self::DownLeft => Self::UpRight,
        }
    }

    /// Returns `true` for the four diagonal directions.
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        let (dr, dc) = self.deltas();
        dr != 0 && dc != 0
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Right => "right",
            Self::Down => "down",
            Self::DownRight => "down-right",
            Self::UpRight => "up-right",
            Self::Left => "left",
            Self::Up => "up",
            Self::UpLeft => "up-left",
            Self::DownLeft => "down-left",
        };
        f.write_str(name)
    }
}
