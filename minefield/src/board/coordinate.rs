use std::fmt;

/// Symbols used to name rows and columns, in order. A board axis can be at most as long as
/// this alphabet so that every row and column is addressable by a single character.
pub const SYMBOLS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Largest number of rows or columns on any board.
pub const MAX_SIZE: usize = SYMBOLS.len();

/// Get the symbol that names the given row or column index, if it is in range.
pub fn symbol(index: usize) -> Option<char> {
    SYMBOLS.as_bytes().get(index).map(|&b| b as char)
}

/// Get the row or column index named by the given symbol. Case-insensitive.
pub fn symbol_index(symbol: char) -> Option<usize> {
    let symbol = symbol.to_ascii_uppercase();
    SYMBOLS.chars().position(|s| s == symbol)
}

/// The coordinates of a [`Cell`][crate::board::Cell] in the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Vertical position of the cell.
    pub row: usize,
    /// Horizontal position of the cell.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Construct a [`Coordinate`] from the symbols naming its row and column.
    /// Returns `None` if either symbol is not part of [`SYMBOLS`].
    pub fn from_symbols(row: char, col: char) -> Option<Self> {
        Some(Self::new(symbol_index(row)?, symbol_index(col)?))
    }

    /// Get the `(row, col)` symbols naming this coordinate.
    pub fn symbols(&self) -> Option<(char, char)> {
        Some((symbol(self.row)?, symbol(self.col)?))
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    /// Shows the coordinate the way the player types it, e.g. `3 B`. Falls back to the
    /// numeric indexes for coordinates beyond the symbol alphabet.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.symbols() {
            Some((row, col)) => write!(f, "{} {}", row, col),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_covers_36_positions() {
        assert_eq!(MAX_SIZE, 36);
        assert_eq!(symbol(0), Some('0'));
        assert_eq!(symbol(10), Some('A'));
        assert_eq!(symbol(35), Some('Z'));
        assert_eq!(symbol(36), None);
    }

    #[test]
    fn symbols_are_case_insensitive() {
        assert_eq!(Coordinate::from_symbols('b', '3'), Some(Coordinate::new(11, 3)));
        assert_eq!(Coordinate::from_symbols('B', '3'), Some(Coordinate::new(11, 3)));
        assert_eq!(Coordinate::from_symbols('?', '3'), None);
        assert_eq!(Coordinate::from_symbols('3', ' '), None);
    }

    #[test]
    fn display_uses_symbols() {
        assert_eq!(Coordinate::new(2, 12).to_string(), "2 C");
        assert_eq!(Coordinate::new(40, 1).to_string(), "(40, 1)");
    }
}
