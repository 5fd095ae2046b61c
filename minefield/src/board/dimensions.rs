use std::borrow::Borrow;

use crate::{
    board::{Axis, Coordinate, DimensionError},
    limits::Limits,
};

/// Smallest number of rows or columns on any board.
pub const MIN_SIZE: usize = 2;

/// Offsets `(row, col)` of the eight cells surrounding a cell, in reading order.
const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Dimensions of a rectangular board. Implements the methods needed to check bounds,
/// linearize indexes, and compute neighbor cells.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Height of the board. This corresponds to the `row` of a [`Coordinate`].
    rows: usize,
    /// Width of the board. This corresponds to the `col` of a [`Coordinate`].
    cols: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified number of rows and columns.
    /// Each must lie in `[MIN_SIZE, max]` where `max` comes from `limits`. Rows are checked
    /// first.
    pub fn new(rows: usize, cols: usize, limits: &Limits) -> Result<Self, DimensionError> {
        if rows < MIN_SIZE || rows > limits.max_rows() {
            return Err(DimensionError::new(Axis::Rows, rows, limits.max_rows()));
        }
        if cols < MIN_SIZE || cols > limits.max_cols() {
            return Err(DimensionError::new(Axis::Cols, cols, limits.max_cols()));
        }
        Ok(Self { rows, cols })
    }

    /// Get the number of rows of these [`Dimensions`].
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns of these [`Dimensions`].
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Compute the total number of cells.
    pub fn total_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.check_bounds(coord).is_some()
    }

    /// Convert a coordinate to a linear index within these dimensions.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        self.check_bounds(coord)
            .map(|coord| coord.row * self.cols + coord.col)
    }

    /// Convert a linear index back into a [`Coordinate`].
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        Coordinate {
            row: idx / self.cols,
            col: idx % self.cols,
        }
    }

    /// Iterate every coordinate in row-major order, matching linear indexes.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let dim = *self;
        (0..self.total_size()).map(move |idx| dim.un_linearize(idx))
    }

    /// Get an iterator over rows of this board. Each row is an iterator over the coordinates
    /// of that row.
    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let cols = self.cols;
        (0..self.rows).map(move |row| (0..cols).map(move |col| Coordinate { row, col }))
    }

    /// Iterate the neighbors of the given coordinate: the up to eight cells horizontally,
    /// vertically and diagonally adjacent to it. Neighbors never wrap around the edges. If the
    /// coordinate itself is out of bounds the iterator is empty.
    pub fn neighbors(&self, coord: Coordinate) -> Neighbors {
        Neighbors {
            dim: *self,
            coord,
            // Out of bounds coordinates skip directly to the end so we don't have to check
            // the center on every step.
            step: self
                .check_bounds(coord)
                .map_or(MOORE_OFFSETS.len(), |_| 0),
        }
    }

    /// Check if the given [`Coordinate`] is in bounds for these [`Dimensions`]. If so, return
    /// it, otherwise return `None`.
    #[inline]
    fn check_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> Option<B> {
        let c = coord.borrow();
        if c.row < self.rows && c.col < self.cols {
            Some(coord)
        } else {
            None
        }
    }
}

/// Iterator over the neighbors of a coordinate.
#[derive(Debug, Clone)]
pub struct Neighbors {
    dim: Dimensions,
    coord: Coordinate,
    /// Index of the next offset in `MOORE_OFFSETS` to try.
    step: usize,
}

impl Iterator for Neighbors {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        loop {
            let &(dr, dc) = MOORE_OFFSETS.get(self.step)?;
            self.step += 1;
            let row = offset(self.coord.row, dr, self.dim.rows);
            let col = offset(self.coord.col, dc, self.dim.cols);
            if let (Some(row), Some(col)) = (row, col) {
                return Some(Coordinate::new(row, col));
            }
        }
    }
}

/// Move `pos` by `delta`, returning `None` if that leaves `[0, len)`.
fn offset(pos: usize, delta: isize, len: usize) -> Option<usize> {
    let moved = if delta < 0 {
        pos.checked_sub(delta.unsigned_abs())?
    } else {
        pos + delta as usize
    };
    if moved < len {
        Some(moved)
    } else {
        None
    }
}
