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

use std::io;

use anyhow::Context;
use clap::{value_t, App, Arg, ArgMatches};
use crossterm::terminal;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use minefield::{Board, Limits};

use crate::game::{play, InputReader};

mod command;
mod game;
mod render;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let matches = App::new("Minesweeper")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Play Minesweeper in a terminal window.")
        .arg(
            Arg::with_name("rows")
                .short("r")
                .long("rows")
                .value_name("ROWS")
                .help("number of rows in the board, 2 to 36 depending on the terminal height")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("cols")
                .short("c")
                .long("cols")
                .value_name("COLS")
                .help("number of columns in the board, 2 to 36 depending on the terminal width")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("mines")
                .short("m")
                .long("mines")
                .value_name("MINES")
                .help("number of mines to place, between 1 and rows*cols-1; picked at random if omitted or not positive")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-1"),
        )
        .get_matches();

    let (rows, cols, mines) = board_args(&matches);
    let limits = terminal_limits()?;
    let board = Board::new(rows, cols, mines, &limits)?;

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    play(board, &mut input, &mut io::stdout())?;
    Ok(())
}

/// Read the board's rows, columns and mine count from the command line, exiting with a usage
/// message if any of them is not a number.
fn board_args(matches: &ArgMatches) -> (usize, usize, i64) {
    let rows = value_t!(matches, "rows", usize).unwrap_or_else(|e| e.exit());
    let cols = value_t!(matches, "cols", usize).unwrap_or_else(|e| e.exit());
    let mines = value_t!(matches, "mines", i64).unwrap_or_else(|e| e.exit());
    (rows, cols, mines)
}

/// Work out how large a board fits in the current terminal. Falls back to the largest
/// limits if the terminal size can't be read, for example when output is redirected.
fn terminal_limits() -> anyhow::Result<Limits> {
    match terminal::size() {
        Ok((width, height)) => Limits::from_terminal_size(width, height)
            .context("the terminal is too small to play in"),
        Err(err) => {
            warn!(%err, "could not read terminal size, using the largest board limits");
            Ok(Limits::default())
        }
    }
}
