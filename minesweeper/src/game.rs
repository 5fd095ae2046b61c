//! The interactive game loop.

use std::io::{self, BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use minefield::{Board, OpenOutcome};
use tracing::{debug, info};

use crate::{
    command::{Command, CommandError},
    render::BoardDisplay,
};

const HELP: &str = "'(o)pen r c' -> Opens the cell at row r column c
'(f)lag r c' -> Flags the cell at row r column c";

/// How a game ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Ending {
    /// Every cell was opened or flagged without setting off a mine.
    Won,
    /// The player opened a mine.
    Lost,
    /// The player quit or input ran out.
    Quit,
}

/// Play a game on `board`, reading moves from `input` and drawing to `out` until the game
/// ends.
pub fn play<B: BufRead, W: Write>(
    mut board: Board,
    input: &mut InputReader<B>,
    out: &mut W,
) -> io::Result<Ending> {
    let mut status: Option<String> = None;
    loop {
        if board.complete() {
            board.reveal();
            draw(out, &board, None)?;
            writeln!(
                out,
                "CONGRATULATIONS! You successfully found all the mines without triggering one!"
            )?;
            info!("game won");
            return Ok(Ending::Won);
        }

        draw(out, &board, status.take().as_deref())?;
        writeln!(out, "{}", HELP)?;
        write!(out, "Next move? ")?;
        out.flush()?;

        let line = match input.read_line()? {
            Some(line) => line,
            None => {
                writeln!(out)?;
                writeln!(out, "Exiting...")?;
                return Ok(Ending::Quit);
            }
        };
        let command = Command::parse(line).and_then(|command| match command.target() {
            Some(coord) if !board.is_cell(coord) => Err(CommandError::OffBoard(coord)),
            _ => Ok(command),
        });
        debug!(?command, "read move");

        match command {
            Err(err) => status = Some(err.to_string()),
            Ok(Command::Help) => status = Some(HELP.to_owned()),
            Ok(Command::Quit) => {
                writeln!(out, "Exiting...")?;
                return Ok(Ending::Quit);
            }
            Ok(Command::Flag(coord)) => {
                board.flag(coord);
            }
            Ok(Command::Open(coord)) => match board.open(coord) {
                OpenOutcome::Detonated => {
                    board.reveal();
                    draw(out, &board, None)?;
                    writeln!(
                        out,
                        "BOOM! You hit a mine! A condolence letter will be sent to your next of kin."
                    )?;
                    info!(%coord, "game lost");
                    return Ok(Ending::Lost);
                }
                OpenOutcome::Flagged => {
                    status = Some(format!(
                        "Use f {} to remove the flag on this cell before opening.",
                        coord
                    ));
                }
                OpenOutcome::Opened(_) | OpenOutcome::OffBoard => {}
            },
        }
    }
}

/// Clear the screen and draw the board, followed by a status line if there is one.
fn draw<W: Write>(out: &mut W, board: &Board, status: Option<&str>) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    write!(out, "{}", BoardDisplay(board))?;
    if let Some(status) = status {
        writeln!(out, "{}", status)?;
    }
    Ok(())
}

/// Helper to read input from the player.
pub struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    pub fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Clear the string buffer and read a line. Returns `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<&str>> {
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            Ok(None)
        } else {
            Ok(Some(self.buf.trim()))
        }
    }
}

#[cfg(test)]
mod tests {
    use minefield::{BoardSetup, Coordinate, Limits};

    use super::*;

    /// 2x2 board with a mine in the top left corner.
    fn corner_board() -> Board {
        BoardSetup::new(2, 2, &Limits::default())
            .unwrap()
            .start_with_mines(vec![Coordinate::new(0, 0)])
            .unwrap()
    }

    fn run(board: Board, moves: &str) -> (Ending, String) {
        let mut input = InputReader::new(moves.as_bytes());
        let mut out = Vec::new();
        let ending = play(board, &mut input, &mut out).unwrap();
        (ending, String::from_utf8(out).unwrap())
    }

    #[test]
    fn opening_all_clear_cells_and_flagging_the_mine_wins() {
        let (ending, out) = run(corner_board(), "o 0 1\no 1 0\nO 1 1\nf 0 0\n");
        assert_eq!(ending, Ending::Won);
        assert!(out.contains("CONGRATULATIONS!"));
    }

    #[test]
    fn opening_the_mine_loses() {
        let (ending, out) = run(corner_board(), "o 0 0\n");
        assert_eq!(ending, Ending::Lost);
        assert!(out.contains("BOOM!"));
        assert!(out.contains("0| M 1|"));
    }

    #[test]
    fn flagged_cells_must_be_unflagged_first() {
        let (ending, out) = run(corner_board(), "f 0 0\no 0 0\nf 0 0\no 0 0\n");
        assert_eq!(ending, Ending::Lost);
        assert!(out.contains("Use f 0 0 to remove the flag on this cell before opening."));
    }

    #[test]
    fn bad_input_is_reported_and_play_continues() {
        let (ending, out) = run(corner_board(), "nonsense\no 5 5\nx 1 1\nq\n");
        assert_eq!(ending, Ending::Quit);
        assert!(out.contains("Incomplete or invalid command."));
        assert!(out.contains("Invalid coordinates: 5 5"));
        assert!(out.contains("Invalid command 'x'."));
        assert!(out.contains("Exiting..."));
    }

    #[test]
    fn chord_past_a_misplaced_flag_keeps_playing() {
        let (ending, out) = run(corner_board(), "o 1 1\nf 0 1\no 1 1\n");
        assert_eq!(ending, Ending::Won);
        assert!(!out.contains("BOOM!"));
        assert!(out.contains("CONGRATULATIONS!"));
    }

    #[test]
    fn end_of_input_quits() {
        let (ending, out) = run(corner_board(), "o 1 1\n");
        assert_eq!(ending, Ending::Quit);
        assert!(out.ends_with("Exiting...\n"));
    }
}
