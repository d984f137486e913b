//! Plain-text rendering of a [`GridViewModel`].

use std::fmt::Write as _;

use wordsearch_core::LetterGrid;
use wordsearch_game::{CellMarks, CellView, GridViewModel, SelectionOutcome};

pub const CONGRATULATIONS: &str = "Congratulations! You found all the words!";

/// Renders the board with row and column indices, the score line and, once the
/// puzzle is complete, the congratulation line.
///
/// Found letters are printed in lower case; cells on the line being dragged are
/// bracketed.
#[must_use]
pub fn render_board(vm: &GridViewModel) -> String {
    let mut out = String::from("  ");
    for col in 0..vm.size() {
        let _ = write!(out, "{col:>2} ");
    }
    out.push('\n');

    for (row, cells) in vm.rows().enumerate() {
        let _ = write!(out, "{row:>2}");
        for cell in cells {
            out.push_str(&render_cell(cell));
        }
        out.push('\n');
    }

    let _ = writeln!(out, "Score: {}", vm.score);
    if vm.complete {
        out.push_str(CONGRATULATIONS);
        out.push('\n');
    }
    out
}

fn render_cell(view: &CellView) -> String {
    let letter = if view.marks.contains(CellMarks::FOUND) {
        view.letter.to_ascii_lowercase()
    } else {
        view.letter.as_char()
    };
    if view.marks.contains(CellMarks::SELECTED) {
        format!("[{letter}]")
    } else {
        format!(" {letter} ")
    }
}

/// Renders the target word list with a check mark next to each found word.
#[must_use]
pub fn render_words(vm: &GridViewModel) -> String {
    let mut out = String::new();
    for status in &vm.words {
        let mark = if status.found { 'x' } else { ' ' };
        let _ = writeln!(out, "  [{mark}] {}", status.word);
    }
    out
}

/// Describes the result of a finished selection.
#[must_use]
pub fn render_outcome(outcome: &SelectionOutcome, grid: &LetterGrid) -> String {
    match outcome {
        SelectionOutcome::Matched { word, .. } => format!("Found {word}!"),
        SelectionOutcome::NoMatch(line) => {
            format!("{} is not a remaining word.", grid.read(line))
        }
        SelectionOutcome::Rejected(err) => format!("Invalid selection: {err}."),
        SelectionOutcome::Ignored => "No selection in progress.".to_owned(),
    }
}
