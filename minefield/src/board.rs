//! Types that make up the game board.

use std::collections::HashSet;

use tracing::trace;

use crate::limits::Limits;

use self::grid::Grid;
pub use self::{
    cell::{Cell, Label, Mark, MINE_MARKER},
    coordinate::{symbol, symbol_index, Coordinate, MAX_SIZE, SYMBOLS},
    dimensions::{Dimensions, Neighbors, MIN_SIZE},
    errors::{Axis, DimensionError, MineCountError, SetupError},
    setup::{BoardSetup, MineCount},
};

pub mod cell;
mod coordinate;
mod dimensions;
mod errors;
mod grid;
pub mod setup;

/// Which neighbors of a cell to return from [`Board::neighbors`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NeighborFilter {
    /// Every neighbor on the board.
    All,
    /// Only neighbors the player has flagged.
    Flagged,
    /// Only neighbors that are neither open nor flagged.
    Unmarked,
}

impl Default for NeighborFilter {
    fn default() -> Self {
        NeighborFilter::All
    }
}

/// Result of opening a cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OpenOutcome {
    /// The open went ahead without setting off a mine. Holds the number of cells that were
    /// newly opened, which may be zero if the cell was already open and could not be chorded.
    Opened(usize),
    /// The cell is flagged, so it was left alone. Remove the flag first to open it.
    Flagged,
    /// A closed mine was opened. The game is lost.
    Detonated,
    /// The coordinate is not on the board.
    OffBoard,
}

impl OpenOutcome {
    /// Returns true if the game should go on after this open.
    pub fn continues(&self) -> bool {
        *self != OpenOutcome::Detonated
    }
}

/// What the player can see of a cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellView {
    /// Neither opened nor flagged.
    Hidden,
    /// Flagged and not open.
    Flagged,
    /// Open, showing its label.
    Open(Label),
}

impl From<&Cell> for CellView {
    fn from(cell: &Cell) -> Self {
        if cell.is_open() {
            CellView::Open(cell.label())
        } else if cell.is_flagged() {
            CellView::Flagged
        } else {
            CellView::Hidden
        }
    }
}

/// A minefield: a fixed grid of cells, some of which hold mines.
#[derive(Debug, Clone)]
pub struct Board {
    /// Cells of the board.
    grid: Grid,

    /// Coordinates of every mine.
    mines: HashSet<Coordinate>,
}

impl Board {
    /// Build a board with randomly placed mines. `rows` and `cols` are checked against
    /// `limits` first, then the mine count against the size of the board.
    pub fn new<M: Into<MineCount>>(
        rows: usize,
        cols: usize,
        mines: M,
        limits: &Limits,
    ) -> Result<Self, SetupError> {
        BoardSetup::new(rows, cols, limits)?.mines(mines).start()
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Number of mines on the board.
    pub fn mine_count(&self) -> usize {
        self.mines.len()
    }

    /// Iterate the coordinates of all mines, in no particular order.
    pub fn mine_coordinates(&self) -> impl Iterator<Item = &Coordinate> {
        self.mines.iter()
    }

    /// Returns true if the coordinate names a cell on this board.
    pub fn is_cell(&self, coord: Coordinate) -> bool {
        self.dimensions().contains(&coord)
    }

    /// Get the cell at the given coordinate, or `None` if it is off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<&Cell> {
        self.grid.get(coord)
    }

    /// Get what the player sees at the given coordinate.
    pub fn view(&self, coord: Coordinate) -> Option<CellView> {
        self.cell(coord).map(CellView::from)
    }

    /// Get an iterator over the board's rows. Each row is an iterator over what the player
    /// sees of each cell in that row.
    pub fn iter_board<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = CellView>> {
        self.dimensions()
            .iter_rows()
            .map(move |row| row.map(move |coord| CellView::from(&self.grid[coord])))
    }

    /// Get the neighbors of a coordinate that pass the given filter.
    pub fn neighbors(&self, coord: Coordinate, filter: NeighborFilter) -> Vec<Coordinate> {
        let grid = &self.grid;
        self.dimensions()
            .neighbors(coord)
            .filter(|&neighbor| {
                let cell = &grid[neighbor];
                match filter {
                    NeighborFilter::All => true,
                    NeighborFilter::Flagged => cell.is_flagged(),
                    NeighborFilter::Unmarked => !cell.is_open() && !cell.is_flagged(),
                }
            })
            .collect()
    }

    /// Open the cell at the given coordinate.
    ///
    /// * A flagged cell is left alone.
    /// * Opening a cell that is already open chords it: if it has as many flagged neighbors
    ///   as it has neighboring mines, every unmarked neighbor is opened.
    /// * Otherwise the cell is opened. If it has no neighboring mines, its unmarked neighbors
    ///   are opened too, cascading through the connected region of such cells and stopping
    ///   at the numbered cells on its border.
    ///
    /// Returns [`OpenOutcome::Detonated`] if a closed cell was opened and it, or any cell
    /// its cascade reached, was a mine. A chord always lets the game go on: a mine it opens
    /// because of a misplaced flag stays open and counts as an opened cell.
    pub fn open(&mut self, coord: Coordinate) -> OpenOutcome {
        let cell = match self.grid.get(coord) {
            Some(cell) => *cell,
            None => return OpenOutcome::OffBoard,
        };
        if cell.is_flagged() {
            return OpenOutcome::Flagged;
        }
        if cell.is_open() {
            return self.chord(coord, cell);
        }
        match self.cascade(vec![coord]) {
            (_, true) => OpenOutcome::Detonated,
            (opened, false) => OpenOutcome::Opened(opened),
        }
    }

    /// Open the unmarked neighbors of an open cell if its mine count is met by flags.
    fn chord(&mut self, coord: Coordinate, cell: Cell) -> OpenOutcome {
        let flagged = self.neighbors(coord, NeighborFilter::Flagged).len();
        match cell.adjacent_mines() {
            Some(count) if count as usize == flagged => {
                trace!(%coord, count, "chording");
                let unmarked = self.neighbors(coord, NeighborFilter::Unmarked);
                let (opened, _) = self.cascade(unmarked);
                OpenOutcome::Opened(opened)
            }
            _ => OpenOutcome::Opened(0),
        }
    }

    /// Open every coordinate in `pending`, expanding through cells with no neighboring mines.
    /// Each cell is opened at most once, so this visits no more cells than the board holds.
    /// Returns how many cells were opened, mines included, and whether any of them was a mine.
    fn cascade(&mut self, mut pending: Vec<Coordinate>) -> (usize, bool) {
        let mut opened = 0;
        let mut detonated = false;
        while let Some(coord) = pending.pop() {
            let cell = &mut self.grid[coord];
            if cell.is_open() || cell.is_flagged() {
                continue;
            }
            opened += 1;
            if cell.open() {
                detonated = true;
                continue;
            }
            if cell.is_safe() {
                pending.extend(self.neighbors(coord, NeighborFilter::Unmarked));
            }
        }
        trace!(opened, detonated, "cascade finished");
        (opened, detonated)
    }

    /// Toggle the flag on the cell at the given coordinate. Returns whether the cell is now
    /// flagged, or `None` if the coordinate is off the board. Open cells may be flagged too;
    /// stopping that is up to the caller.
    pub fn flag(&mut self, coord: Coordinate) -> Option<bool> {
        let cell = self.grid.get_mut(coord)?;
        cell.toggle();
        trace!(%coord, flagged = cell.is_flagged(), "toggled flag");
        Some(cell.is_flagged())
    }

    /// Number of flagged cells.
    pub fn flagged_count(&self) -> usize {
        self.grid.iter().filter(|cell| cell.is_flagged()).count()
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.grid.iter().filter(|cell| cell.is_open()).count()
    }

    /// Mines not yet accounted for by flags. Goes negative when the player places more
    /// flags than there are mines.
    pub fn mines_left(&self) -> isize {
        self.mine_count() as isize - self.flagged_count() as isize
    }

    /// Returns true once every cell is open or flagged. Flags are not checked against the
    /// mines, so flagging every cell completes the board.
    pub fn complete(&self) -> bool {
        self.grid
            .iter()
            .all(|cell| cell.is_open() || cell.is_flagged())
    }

    /// Open every cell, without cascading or setting anything off. Used to show the whole
    /// board once the game is over.
    pub fn reveal(&mut self) {
        for cell in self.grid.iter_mut() {
            cell.open();
        }
    }
}


#[cfg(test)]
mod properties {
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    /// Build a board from arbitrary inputs, folding them into valid ranges.
    fn arbitrary_board(rows: u8, cols: u8, mines: u16, seed: u64) -> Board {
        let rows = 2 + rows as usize % 11;
        let cols = 2 + cols as usize % 11;
        let mines = 1 + mines as usize % (rows * cols - 1);
        BoardSetup::new(rows, cols, &Limits::default())
            .unwrap()
            .mines(mines)
            .start_with_rng(&mut StdRng::seed_from_u64(seed))
            .unwrap()
    }

    #[quickcheck]
    fn board_has_every_cell_and_requested_mines(rows: u8, cols: u8, mines: u16, seed: u64) -> bool {
        let b = arbitrary_board(rows, cols, mines, seed);
        let dim = *b.dimensions();
        let requested = 1 + mines as usize % (dim.total_size() - 1);
        let cells = dim.coordinates().filter_map(|c| b.cell(c)).count();
        let mine_cells = dim
            .coordinates()
            .filter(|&c| b.cell(c).unwrap().is_mine())
            .count();
        cells == dim.total_size() && b.mine_count() == requested && mine_cells == requested
    }

    #[quickcheck]
    fn labels_match_brute_force_count(rows: u8, cols: u8, mines: u16, seed: u64) -> bool {
        let b = arbitrary_board(rows, cols, mines, seed);
        let dim = *b.dimensions();
        dim.coordinates().all(|coord| {
            let cell = b.cell(coord).unwrap();
            if cell.is_mine() {
                return cell.label() == Label::Mine;
            }
            let mut count = 0;
            for r in coord.row.saturating_sub(1)..=coord.row + 1 {
                for c in coord.col.saturating_sub(1)..=coord.col + 1 {
                    let other = Coordinate::new(r, c);
                    if other != coord && b.mines.contains(&other) {
                        count += 1;
                    }
                }
            }
            cell.adjacent_mines() == Some(count)
        })
    }

    #[quickcheck]
    fn cascade_never_opens_a_mine(rows: u8, cols: u8, mines: u16, seed: u64) -> TestResult {
        let mut b = arbitrary_board(rows, cols, mines, seed);
        let dim = *b.dimensions();
        let start = match dim
            .coordinates()
            .find(|&c| b.cell(c).unwrap().is_safe())
        {
            Some(start) => start,
            None => return TestResult::discard(),
        };
        if !b.open(start).continues() {
            return TestResult::failed();
        }
        let no_mines_open = b
            .mine_coordinates()
            .all(|&mine| !b.cell(mine).unwrap().is_open());
        // Every open zero cell has all of its neighbors open.
        let region_closed = dim.coordinates().all(|coord| {
            let cell = b.cell(coord).unwrap();
            !(cell.is_open() && cell.is_safe())
                || dim.neighbors(coord).all(|n| b.cell(n).unwrap().is_open())
        });
        TestResult::from_bool(no_mines_open && region_closed)
    }

    #[quickcheck]
    fn open_order_does_not_matter(rows: u8, cols: u8, mines: u16, seed: u64) -> bool {
        let mut forward = arbitrary_board(rows, cols, mines, seed);
        let mut backward = forward.clone();
        let dim = *forward.dimensions();
        let safe: Vec<_> = dim
            .coordinates()
            .filter(|&c| forward.cell(c).unwrap().is_safe())
            .collect();
        for &coord in &safe {
            forward.open(coord);
        }
        for &coord in safe.iter().rev() {
            backward.open(coord);
        }
        dim.coordinates().all(|c| {
            forward.cell(c).unwrap().is_open() == backward.cell(c).unwrap().is_open()
        })
    }
}
