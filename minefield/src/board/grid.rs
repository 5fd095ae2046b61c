//! Storage for the board's cells.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::board::{Cell, Coordinate, Dimensions};

/// Cells of a board, stored in row-major order alongside the [`Dimensions`] used to index
/// them. The number of cells is fixed when the grid is built.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: Dimensions,
    /// Cells that make up this board.
    pub(super) cells: Box<[Cell]>,
}

impl Grid {
    /// Build a grid, producing the cell for every coordinate in row-major order.
    pub(super) fn new<F>(dim: Dimensions, cell_at: F) -> Self
    where
        F: FnMut(Coordinate) -> Cell,
    {
        let cells = dim.coordinates().map(cell_at).collect();
        Self { dim, cells }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&Cell> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut Cell> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Iterate all cells in row-major order.
    pub(super) fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Mutably iterate all cells in row-major order.
    pub(super) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = Cell;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Grid {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
