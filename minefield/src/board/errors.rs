//! Errors used by the [`Board`][crate::board::Board] and
//! [`BoardSetup`][crate::board::BoardSetup].

use std::fmt;

use thiserror::Error;

use crate::board::{Coordinate, MIN_SIZE};

/// Axis of the board that failed validation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Number of rows, the board's height.
    Rows,
    /// Number of columns, the board's width.
    Cols,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Axis::Rows => "height",
            Axis::Cols => "width",
        })
    }
}

/// Error returned when the number of rows or columns does not fit on the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("board {axis} must be between {} and {max} cells, got {size}", MIN_SIZE)]
pub struct DimensionError {
    /// Which axis was out of range.
    axis: Axis,
    /// The size that was requested.
    size: usize,
    /// Largest size allowed along that axis.
    max: usize,
}

impl DimensionError {
    /// Construct a [`DimensionError`] for the given axis.
    pub(crate) fn new(axis: Axis, size: usize, max: usize) -> Self {
        Self { axis, size, max }
    }

    /// The axis that failed validation.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The requested size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The largest size that would have been accepted.
    pub fn max(&self) -> usize {
        self.max
    }
}

/// Error returned when the requested number of mines cannot fit on the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("too many mines to fit, must be between 1 and {max}, got {count}")]
pub struct MineCountError {
    /// Requested number of mines.
    count: usize,
    /// Largest number of mines the board can hold.
    max: usize,
}

impl MineCountError {
    pub(crate) fn new(count: usize, max: usize) -> Self {
        Self { count, max }
    }

    /// The number of mines that was requested.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The largest mine count the board accepts, one less than its cell count.
    pub fn max(&self) -> usize {
        self.max
    }
}

/// Any reason a board could not be built.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum SetupError {
    /// Rows or columns outside the permitted range.
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    /// Mine count outside `[1, rows * cols - 1]`.
    #[error(transparent)]
    MineCount(#[from] MineCountError),

    /// An explicitly placed mine was outside the board.
    #[error("mine at {0:?} is not on the board")]
    OffBoardMine(Coordinate),
}
