//! The square letter grid presented to the player.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Cell, Direction, Letter, SelectionError, SelectionLine, Word, resolve_selection};

/// Errors that can occur while building a [`LetterGrid`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The input has no rows.
    #[display("grid is empty")]
    Empty,
    /// The grid is larger than the supported maximum of 255.
    #[display("grid size {size} exceeds 255")]
    TooLarge {
        /// Number of rows in the input.
        size: usize,
    },
    /// A row does not have as many letters as the grid has rows.
    #[display("row {row} has {len} letters, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Number of letters found in the row.
        len: usize,
        /// Number of letters required.
        expected: usize,
    },
    /// A character is not an uppercase letter.
    #[display("invalid character {ch:?} at row {row}, column {col}")]
    InvalidCharacter {
        /// Row of the offending character.
        row: usize,
        /// Column of the offending character.
        col: usize,
        /// The offending character.
        ch: char,
    },
}

/// A `size x size` row-major matrix of letters.
///
/// A grid is immutable once built; a new puzzle gets a new grid. Grids are built by
/// the generator through [`LetterGrid::from_fn`], or parsed from text with one row
/// per line, which is also the [`Display`] format.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Cell, LetterGrid};
///
/// let grid: LetterGrid = "\
/// DOG
/// XAX
/// XXY
/// "
/// .parse()?;
///
/// assert_eq!(grid.size(), 3);
/// assert_eq!(grid[Cell::new(1, 1)].as_char(), 'A');
/// assert_eq!(grid.get(Cell::new(3, 0)), None);
///
/// let day = grid.find_word(&"DAY".parse()?).expect("DAY is on the diagonal");
/// assert_eq!(day.start(), Cell::new(0, 0));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterGrid {
    size: u8,
    letters: Vec<Letter>,
}

impl LetterGrid {
    /// Builds a grid by calling `f` once per cell in row-major order.
    #[must_use]
    pub fn from_fn<F>(size: u8, f: F) -> Self
    where
        F: FnMut(Cell) -> Letter,
    {
        Self {
            size,
            letters: Cell::all(size).map(f).collect(),
        }
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns the letter at `cell`, or `None` if it lies outside the grid.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Letter> {
        cell.is_within(self.size)
            .then(|| self.letters[cell.index(self.size)])
    }

    /// Returns `true` if `cell` lies inside the grid.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.is_within(self.size)
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Letter]> {
        self.letters.chunks(usize::from(self.size).max(1))
    }

    /// Resolves a drag gesture against this grid.
    ///
    /// See [`resolve_selection`].
    ///
    /// # Errors
    ///
    /// Returns a [`SelectionError`] if the gesture is not a straight line inside
    /// the grid.
    pub fn resolve(&self, start: Cell, end: Cell) -> Result<SelectionLine, SelectionError> {
        resolve_selection(self.size, start, end)
    }

    /// Joins the letters on `line` in visiting order.
    ///
    /// Cells outside the grid are skipped.
    #[must_use]
    pub fn read(&self, line: &SelectionLine) -> String {
        line.cells()
            .iter()
            .filter_map(|&cell| self.get(cell))
            .map(Letter::as_char)
            .collect()
    }

    /// Returns the word spelled by `line`, or `None` if any cell lies outside the grid.
    #[must_use]
    pub fn read_word(&self, line: &SelectionLine) -> Option<Word> {
        let letters = line
            .cells()
            .iter()
            .map(|&cell| self.get(cell))
            .collect::<Option<Vec<_>>>()?;
        Word::from_letters(letters).ok()
    }

    /// Finds the first occurrence of `word` along any of the eight directions.
    ///
    /// Cells are scanned in row-major order and directions in [`Direction::ALL`]
    /// order.
    #[must_use]
    pub fn find_word(&self, word: &Word) -> Option<SelectionLine> {
        self.find_all(word).next()
    }

    /// Returns an iterator over every occurrence of `word` in the grid.
    ///
    /// A palindrome placed once is reported twice, once per reading direction.
    pub fn find_all<'a>(&'a self, word: &'a Word) -> impl Iterator<Item = SelectionLine> + 'a {
        Cell::all(self.size)
            .filter(move |&cell| self.get(cell) == word.letters().first().copied())
            .flat_map(move |cell| {
                Direction::ALL.into_iter().filter_map(move |direction| {
                    SelectionLine::from_ray(cell, direction, word.len(), self.size)
                })
            })
            .filter(move |line| {
                line.cells()
                    .iter()
                    .zip(word.letters())
                    .all(|(&cell, &letter)| self.get(cell) == Some(letter))
            })
    }
}

impl Index<Cell> for LetterGrid {
    type Output = Letter;

    /// # Panics
    ///
    /// Panics if `cell` lies outside the grid.
    fn index(&self, cell: Cell) -> &Self::Output {
        assert!(
            cell.is_within(self.size),
            "cell {cell} outside {0}x{0} grid",
            self.size
        );
        &self.letters[cell.index(self.size)]
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for letter in row {
                write!(f, "{letter}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for LetterGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(GridError::Empty);
        }
        let size =
            u8::try_from(rows.len()).map_err(|_| GridError::TooLarge { size: rows.len() })?;

        let mut letters = Vec::with_capacity(rows.len() * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != rows.len() {
                return Err(GridError::RaggedRow {
                    row,
                    len,
                    expected: rows.len(),
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let letter = Letter::try_from(ch)
                    .map_err(|_| GridError::InvalidCharacter { row, col, ch })?;
                letters.push(letter);
            }
        }
        Ok(Self { size, letters })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
CATX
XOXX
XXWX
TACX
";

    fn sample() -> LetterGrid {
        SAMPLE.parse().unwrap()
    }

    #[test]
    fn test_display_roundtrips_parse() {
        assert_eq!(sample().to_string(), SAMPLE);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<LetterGrid>(), Err(GridError::Empty));
        assert_eq!(
            "AB\nC\n".parse::<LetterGrid>(),
            Err(GridError::RaggedRow {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(
            "AB\nCd\n".parse::<LetterGrid>(),
            Err(GridError::InvalidCharacter {
                row: 1,
                col: 1,
                ch: 'd'
            })
        );
    }

    #[test]
    fn test_read_follows_visiting_order() {
        let grid = sample();
        let forward = grid.resolve(Cell::new(0, 0), Cell::new(0, 2)).unwrap();
        assert_eq!(grid.read(&forward), "CAT");
        assert_eq!(grid.read(&forward.reversed()), "TAC");
        assert_eq!(grid.read_word(&forward), Some("CAT".parse().unwrap()));
    }

    #[test]
    fn test_read_word_outside_grid() {
        let grid = sample();
        let line = SelectionLine::from_ray(Cell::new(5, 5), Direction::Right, 2, 10).unwrap();
        assert_eq!(grid.read_word(&line), None);
        assert_eq!(grid.read(&line), "");
    }

    #[test]
    fn test_find_all_reports_every_reading() {
        let grid = sample();
        let cat: Word = "CAT".parse().unwrap();
        let found: Vec<_> = grid.find_all(&cat).map(|l| (l.start(), l.end())).collect();
        assert_eq!(
            found,
            [
                (Cell::new(0, 0), Cell::new(0, 2)),
                (Cell::new(3, 2), Cell::new(3, 0)),
            ]
        );
        assert_eq!(
            grid.find_word(&"COW".parse().unwrap()).map(|l| l.end()),
            Some(Cell::new(2, 2))
        );
        assert_eq!(grid.find_word(&"DOG".parse().unwrap()), None);
    }

    #[test]
    fn test_from_fn_row_major() {
        let grid = LetterGrid::from_fn(3, |cell| {
            Letter::ALPHABET[usize::from(cell.row) * 3 + usize::from(cell.col)]
        });
        assert_eq!(grid.to_string(), "ABC\nDEF\nGHI\n");
        assert_eq!(grid.rows().len(), 3);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_index_outside_panics() {
        let _ = sample()[Cell::new(4, 0)];
    }
}
