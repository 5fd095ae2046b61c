//! Parsing of the player's moves.

use minefield::Coordinate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// A move typed by the player.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    /// Open the cell, or chord it if it is already open.
    Open(Coordinate),
    /// Toggle the flag on the cell.
    Flag(Coordinate),
    Help,
    Quit,
}

/// Why a line of input was not a valid move.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum CommandError {
    #[error("Incomplete or invalid command. Please use o (open) and f (flag) to play")]
    Malformed,

    #[error("Invalid command '{0}'. Please use open (or o) and flag (or f) to play")]
    UnknownAction(String),

    #[error("Invalid coordinates: {row} {col}")]
    BadSymbols { row: char, col: char },

    #[error("Invalid coordinates: {0}")]
    OffBoard(Coordinate),
}

/// Matcher for moves that target a cell, e.g. `o 3 B` or `flag 3,b`.
static MOVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)(?P<action>[[:alpha:]]+)\s+
        (?P<row>\S)(?:\s*,\s*|\s+)(?P<col>\S)$",
    )
    .unwrap()
});

impl Command {
    /// Parse a line of input. Surrounding whitespace and case are ignored.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim().to_ascii_lowercase();
        match input.as_str() {
            "?" | "h" | "help" => return Ok(Command::Help),
            "q" | "quit" | "exit" => return Ok(Command::Quit),
            _ => {}
        }
        let captures = MOVE.captures(&input).ok_or(CommandError::Malformed)?;
        let symbol = |name: &str| {
            captures[name]
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase())
                .ok_or(CommandError::Malformed)
        };
        let (row, col) = (symbol("row")?, symbol("col")?);
        let coord =
            Coordinate::from_symbols(row, col).ok_or(CommandError::BadSymbols { row, col })?;
        match &captures["action"] {
            "o" | "open" => Ok(Command::Open(coord)),
            "f" | "flag" => Ok(Command::Flag(coord)),
            other => Err(CommandError::UnknownAction(other.to_owned())),
        }
    }

    /// The cell this command targets, if any.
    pub fn target(&self) -> Option<Coordinate> {
        match *self {
            Command::Open(coord) | Command::Flag(coord) => Some(coord),
            Command::Help | Command::Quit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_moves() {
        assert_eq!(
            Command::parse("o 3 4"),
            Ok(Command::Open(Coordinate::new(3, 4)))
        );
        assert_eq!(
            Command::parse("  OPEN a  b "),
            Ok(Command::Open(Coordinate::new(10, 11)))
        );
        assert_eq!(
            Command::parse("f z,0"),
            Ok(Command::Flag(Coordinate::new(35, 0)))
        );
        assert_eq!(
            Command::parse("flag 1 , 2"),
            Ok(Command::Flag(Coordinate::new(1, 2)))
        );
    }

    #[test]
    fn parses_words() {
        assert_eq!(Command::parse("?"), Ok(Command::Help));
        assert_eq!(Command::parse("Help"), Ok(Command::Help));
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(Command::parse(""), Err(CommandError::Malformed));
        assert_eq!(Command::parse("o 3"), Err(CommandError::Malformed));
        assert_eq!(Command::parse("o 10 3"), Err(CommandError::Malformed));
        assert_eq!(
            Command::parse("x 1 2"),
            Err(CommandError::UnknownAction("x".to_owned()))
        );
        assert_eq!(
            Command::parse("o ! 2"),
            Err(CommandError::BadSymbols { row: '!', col: '2' })
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            CommandError::OffBoard(Coordinate::new(9, 10)).to_string(),
            "Invalid coordinates: 9 A"
        );
        assert_eq!(
            CommandError::UnknownAction("x".to_owned()).to_string(),
            "Invalid command 'x'. Please use open (or o) and flag (or f) to play"
        );
    }

    #[test]
    fn targets() {
        assert_eq!(Command::Help.target(), None);
        assert_eq!(
            Command::Flag(Coordinate::new(1, 1)).target(),
            Some(Coordinate::new(1, 1))
        );
    }
}
