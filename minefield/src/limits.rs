//! Upper bounds on board size.
//!
//! The board itself only checks rows and columns against a [`Limits`]. Where those maxima come
//! from is up to the caller; [`Limits::from_terminal_size`] derives them from the size of the
//! terminal the board will be drawn in.

use thiserror::Error;
use tracing::debug;

use crate::board::MAX_SIZE;

/// Columns the frame around the grid takes up, not counting the cells themselves.
pub const FRAME_WIDTH: u16 = 10;

/// Lines taken up by everything other than the grid's rows: title, column header, borders and
/// the command prompt.
pub const FRAME_HEIGHT: u16 = 7;

/// Width in characters of a single rendered cell.
pub const CELL_WIDTH: u16 = 2;

/// Error returned when the terminal cannot fit any board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum LimitsError {
    #[error("screen is too narrow, minimum screen width is {} columns, got {width}", FRAME_WIDTH)]
    TooNarrow { width: u16 },

    #[error("screen is too short, minimum screen height is {} rows, got {height}", FRAME_HEIGHT)]
    TooShort { height: u16 },
}

/// Largest number of rows and columns a board may have.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Limits {
    max_rows: usize,
    max_cols: usize,
}

impl Limits {
    /// Construct limits with the given maxima. Both are capped at [`MAX_SIZE`].
    pub fn new(max_rows: usize, max_cols: usize) -> Self {
        Self {
            max_rows: max_rows.min(MAX_SIZE),
            max_cols: max_cols.min(MAX_SIZE),
        }
    }

    /// Derive limits from a terminal `width` in columns and `height` in lines.
    pub fn from_terminal_size(width: u16, height: u16) -> Result<Self, LimitsError> {
        let spare_width = width
            .checked_sub(FRAME_WIDTH)
            .ok_or(LimitsError::TooNarrow { width })?;
        let spare_height = height
            .checked_sub(FRAME_HEIGHT)
            .ok_or(LimitsError::TooShort { height })?;
        let limits = Self::new(
            spare_height as usize,
            (spare_width / CELL_WIDTH) as usize,
        );
        debug!(width, height, ?limits, "derived board limits from terminal size");
        Ok(limits)
    }

    /// The most rows a board may have.
    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// The most columns a board may have.
    pub fn max_cols(&self) -> usize {
        self.max_cols
    }
}

impl Default for Limits {
    /// The largest limits possible, [`MAX_SIZE`] on both axes.
    fn default() -> Self {
        Self::new(MAX_SIZE, MAX_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_terminal_caps_at_alphabet() {
        let limits = Limits::from_terminal_size(200, 100).unwrap();
        assert_eq!(limits, Limits::default());
        assert_eq!(limits.max_rows(), 36);
        assert_eq!(limits.max_cols(), 36);
    }

    #[test]
    fn small_terminal_shrinks_limits() {
        let limits = Limits::from_terminal_size(40, 20).unwrap();
        assert_eq!(limits.max_rows(), 13);
        assert_eq!(limits.max_cols(), 15);
    }

    #[test]
    fn tiny_terminal_fails() {
        assert_eq!(
            Limits::from_terminal_size(9, 40),
            Err(LimitsError::TooNarrow { width: 9 })
        );
        assert_eq!(
            Limits::from_terminal_size(80, 6),
            Err(LimitsError::TooShort { height: 6 })
        );
    }
}
