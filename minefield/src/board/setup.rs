//! Implements the setup phase of the board: sizing it and laying out the mines.
use std::{collections::HashSet, convert::TryFrom};

use rand::{seq::index, Rng};
use tracing::debug;

use crate::{
    board::{Board, Cell, Coordinate, DimensionError, Dimensions, Grid, MineCountError, SetupError},
    limits::Limits,
};

/// Number of mines to place on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MineCount {
    /// Let the board pick a count between 1 and one less than its number of cells.
    Random,
    /// Place exactly this many mines. Zero is treated the same as [`MineCount::Random`].
    Exact(usize),
}

impl Default for MineCount {
    fn default() -> Self {
        MineCount::Random
    }
}

impl From<i64> for MineCount {
    /// Non-positive counts mean "pick one for me".
    fn from(count: i64) -> Self {
        if count < 1 {
            MineCount::Random
        } else {
            // Saturates on narrow targets, setup still rejects it as too many.
            MineCount::Exact(usize::try_from(count).unwrap_or(usize::MAX))
        }
    }
}

impl From<usize> for MineCount {
    fn from(count: usize) -> Self {
        MineCount::Exact(count)
    }
}

/// Setup phase for a [`Board`]. Holds validated dimensions and the requested mine count.
/// Acts as a builder for [`Board`].
#[derive(Debug, Clone)]
pub struct BoardSetup {
    dim: Dimensions,
    mines: MineCount,
}

impl BoardSetup {
    /// Begin setup of a board with the given number of rows and columns, checked against
    /// `limits`.
    pub fn new(rows: usize, cols: usize, limits: &Limits) -> Result<Self, DimensionError> {
        Ok(Self::from_dimensions(Dimensions::new(rows, cols, limits)?))
    }

    /// Begin setup of a board with already-validated dimensions.
    pub fn from_dimensions(dim: Dimensions) -> Self {
        Self {
            dim,
            mines: MineCount::Random,
        }
    }

    /// Get the [`Dimensions`] of the board being set up.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dim
    }

    /// Set the number of mines to place.
    pub fn mines<M: Into<MineCount>>(mut self, mines: M) -> Self {
        self.mines = mines.into();
        self
    }

    /// Largest number of mines this board can hold. At least one cell is always clear.
    pub fn max_mines(&self) -> usize {
        self.dim.total_size() - 1
    }

    /// Start the game with mines placed using the thread-local random number generator.
    pub fn start(self) -> Result<Board, SetupError> {
        self.start_with_rng(&mut rand::thread_rng())
    }

    /// Start the game, using `rng` both to pick a mine count if needed and to place the
    /// mines. Every set of positions of the resolved size is equally likely.
    pub fn start_with_rng<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Board, SetupError> {
        let count = self.resolve_count(rng)?;
        let dim = self.dim;
        let mines = index::sample(rng, dim.total_size(), count)
            .into_iter()
            .map(|idx| dim.un_linearize(idx))
            .collect();
        Ok(self.build(mines))
    }

    /// Start the game with mines at exactly the given coordinates, ignoring the configured
    /// [`MineCount`]. Duplicate coordinates are counted once. The resulting number of mines
    /// must still fit on the board.
    pub fn start_with_mines<I>(self, mines: I) -> Result<Board, SetupError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mines: HashSet<Coordinate> = mines.into_iter().collect();
        if let Some(&coord) = mines.iter().find(|coord| !self.dim.contains(coord)) {
            return Err(SetupError::OffBoardMine(coord));
        }
        if mines.is_empty() || mines.len() > self.max_mines() {
            return Err(MineCountError::new(mines.len(), self.max_mines()).into());
        }
        Ok(self.build(mines))
    }

    /// Resolve the configured [`MineCount`] into a concrete number of mines.
    fn resolve_count<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, MineCountError> {
        let max = self.max_mines();
        match self.mines {
            MineCount::Random | MineCount::Exact(0) => Ok(rng.gen_range(1, max + 1)),
            MineCount::Exact(count) if count <= max => Ok(count),
            MineCount::Exact(count) => Err(MineCountError::new(count, max)),
        }
    }

    /// Build the board's cells around a fixed set of mines, computing each clear cell's
    /// neighbor count once.
    fn build(self, mines: HashSet<Coordinate>) -> Board {
        let dim = self.dim;
        let grid = Grid::new(dim, |coord| {
            if mines.contains(&coord) {
                Cell::mine()
            } else {
                let adjacent = dim
                    .neighbors(coord)
                    .filter(|neighbor| mines.contains(neighbor))
                    .count();
                Cell::clear(adjacent as u8)
            }
        });
        debug!(
            rows = dim.rows(),
            cols = dim.cols(),
            mines = mines.len(),
            "generated board"
        );
        Board { grid, mines }
    }
}
