//! Render-ready snapshot of a game session.
//!
//! Front ends draw from a [`GridViewModel`] instead of querying the game piece by
//! piece; it carries every letter together with its highlight state.

use wordsearch_core::{Cell, Letter, Word};

use crate::{Game, Score};

bitflags::bitflags! {
    /// Highlight state of a single cell.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct CellMarks: u8 {
        /// The cell is on the line currently being dragged.
        const SELECTED = 0b0000_0001;
        /// The cell belongs to a found word.
        const FOUND = 0b0000_0010;
    }
}

/// One grid cell as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Position of the cell.
    pub cell: Cell,
    /// The letter in the cell.
    pub letter: Letter,
    /// Highlight state.
    pub marks: CellMarks,
}

/// A target word and whether it has been found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStatus {
    /// The target word.
    pub word: Word,
    /// `true` once found.
    pub found: bool,
}

/// Everything needed to draw the board, the word list and the score line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridViewModel {
    size: u8,
    cells: Vec<CellView>,
    /// Target words in alphabetical order.
    pub words: Vec<WordStatus>,
    /// Found/total counter.
    pub score: Score,
    /// `true` once every word has been found.
    pub complete: bool,
}

impl GridViewModel {
    /// Returns the number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns the view of `cell`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<&CellView> {
        cell.is_within(self.size)
            .then(|| &self.cells[cell.index(self.size)])
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[CellView]> {
        self.cells.chunks(usize::from(self.size).max(1))
    }
}

#[must_use]
pub(crate) fn build_grid_vm(game: &Game) -> GridViewModel {
    let grid = game.grid();
    let state = game.match_state();
    let selected = game.selected_cells();

    let cells = Cell::all(grid.size())
        .map(|cell| {
            let mut marks = CellMarks::empty();
            marks.set(CellMarks::SELECTED, selected.contains(&cell));
            marks.set(CellMarks::FOUND, state.is_found_cell(cell));
            CellView {
                cell,
                letter: grid[cell],
                marks,
            }
        })
        .collect();

    let words = state
        .targets()
        .iter()
        .map(|word| WordStatus {
            word: word.clone(),
            found: state.is_found(word),
        })
        .collect();

    GridViewModel {
        size: grid.size(),
        cells,
        words,
        score: state.score(),
        complete: state.is_complete(),
    }
}
