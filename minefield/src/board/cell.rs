//! A single position on the board.

use std::fmt;

use enumflags2::BitFlags;

/// Character shown for a cell containing a mine.
pub const MINE_MARKER: char = 'M';

/// Player-visible marks on a cell. A cell can carry both: the board does not stop the player
/// from flagging a cell that is already open.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Mark {
    /// The cell has been opened.
    Open = 0b01,
    /// The player flagged the cell as a likely mine.
    Flagged = 0b10,
}

/// What a cell shows once it is open.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Label {
    /// The cell holds a mine.
    Mine,
    /// The cell is clear; the value is the number of mines among its neighbors, `0..=8`.
    Count(u8),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Label::Mine => {
                let mut buf = [0u8; 4];
                f.pad(MINE_MARKER.encode_utf8(&mut buf))
            }
            Label::Count(count) => fmt::Display::fmt(count, f),
        }
    }
}

/// A single cell in the board. The label is fixed when the board is generated; only the
/// marks change during play.
#[derive(Debug, Copy, Clone)]
pub struct Cell {
    label: Label,
    marks: BitFlags<Mark>,
}

impl Cell {
    /// Construct an unopened, unflagged cell holding a mine.
    pub fn mine() -> Self {
        Self::with_label(Label::Mine)
    }

    /// Construct an unopened, unflagged clear cell with the given number of adjacent mines.
    pub fn clear(adjacent_mines: u8) -> Self {
        Self::with_label(Label::Count(adjacent_mines))
    }

    fn with_label(label: Label) -> Self {
        Self {
            label,
            marks: BitFlags::empty(),
        }
    }

    /// Open the cell. Returns true if the cell holds a mine, in which case opening it set the
    /// mine off. Opening is permanent, and opening an already open cell changes nothing.
    pub fn open(&mut self) -> bool {
        self.marks = self.marks | Mark::Open;
        self.is_mine()
    }

    /// Flip the flag on this cell.
    pub fn toggle(&mut self) {
        self.marks = self.marks ^ Mark::Flagged;
    }

    /// True if this cell is clear and none of its neighbors hold a mine, meaning its
    /// neighbors can be opened without risk.
    pub fn is_safe(&self) -> bool {
        self.label == Label::Count(0)
    }

    /// Whether this cell holds a mine.
    pub fn is_mine(&self) -> bool {
        self.label == Label::Mine
    }

    /// Whether this cell has been opened.
    pub fn is_open(&self) -> bool {
        self.marks.contains(Mark::Open)
    }

    /// Whether this cell is currently flagged.
    pub fn is_flagged(&self) -> bool {
        self.marks.contains(Mark::Flagged)
    }

    /// The label shown when the cell is open.
    pub fn label(&self) -> Label {
        self.label
    }

    /// Number of neighboring mines, or `None` if this cell is itself a mine.
    pub fn adjacent_mines(&self) -> Option<u8> {
        match self.label {
            Label::Mine => None,
            Label::Count(count) => Some(count),
        }
    }
}
