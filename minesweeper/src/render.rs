//! Text rendering of the board.

use std::fmt;

use minefield::{board::symbol, Board, CellView, Label};

/// Title shown above the board.
const TITLE: &str = "Minesweeper";

/// Display helper that draws the board the way the player sees it.
pub struct BoardDisplay<'a>(pub &'a Board);

impl fmt::Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let board = self.0;
        let cols = board.dimensions().cols();
        let inner = cols * 2;

        writeln!(f, "{:^width$}", TITLE, width = inner + 3)?;
        write!(f, "  ")?;
        for col in 0..cols {
            write!(f, " {}", symbol(col).unwrap_or('?'))?;
        }
        writeln!(f)?;
        writeln!(
            f,
            " /{}\\   Mines Left: {}",
            "-".repeat(inner),
            board.mines_left()
        )?;
        for (row, cells) in board.iter_board().enumerate() {
            write!(f, "{}|", symbol(row).unwrap_or('?'))?;
            for cell in cells {
                write!(f, "{:>2}", Glyph(cell))?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, " \\{}/", "-".repeat(inner))
    }
}

/// Display helper for a single cell.
struct Glyph(CellView);

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            CellView::Hidden => f.pad("."),
            CellView::Flagged => f.pad("F"),
            CellView::Open(Label::Count(0)) => f.pad(""),
            CellView::Open(label) => fmt::Display::fmt(&label, f),
        }
    }
}
