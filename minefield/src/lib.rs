// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Board model for Minesweeper.
//!
//! A [`Board`] is built once per game from a number of rows, columns and mines, validated
//! against [`Limits`]. Play then proceeds by calling [`Board::open`] and [`Board::flag`] until
//! either a mine goes off or [`Board::complete`] reports that every cell is accounted for.
//!
//! ```
//! use minefield::{Board, Coordinate, Limits, OpenOutcome};
//!
//! let mut board = Board::new(9, 9, 10i64, &Limits::default()).unwrap();
//! let outcome = board.open(Coordinate::new(4, 4));
//! if outcome == OpenOutcome::Detonated {
//!     board.reveal();
//! }
//! assert!(board.is_cell(Coordinate::new(8, 8)));
//! ```

pub mod board;
pub mod limits;

pub use crate::{
    board::{
        Board, BoardSetup, Cell, CellView, Coordinate, DimensionError, Dimensions, Label,
        MineCount, MineCountError, NeighborFilter, OpenOutcome, SetupError,
    },
    limits::{Limits, LimitsError},
};
