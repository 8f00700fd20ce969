use std::fmt;

use crate::error::{GameError, Result};

/// A board coordinate. Row 0 is black's back rank (rank 8), row 7 is
/// white's back rank (rank 1); column 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: i32, col: i32) -> Result<Square> {
        Self::checked(row, col).ok_or(GameError::OutOfBounds { row, col })
    }

    /// Constructor for coordinates that are known to be on the board.
    pub(crate) const fn at(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square { row, col }
    }

    fn checked(row: i32, col: i32) -> Option<Square> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Single index in 0..64, row-major from a8.
    pub fn index(&self) -> usize {
        self.row() * 8 + self.col()
    }

    /// The square `(dr, dc)` away, or `None` if that leaves the board.
    pub fn offset(&self, dr: i32, dc: i32) -> Option<Square> {
        Self::checked(self.row as i32 + dr, self.col as i32 + dc)
    }

    /// All 64 squares in row-major scan order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }

    pub fn file_char(&self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank_char(&self) -> char {
        (b'8' - self.row) as char
    }

    /// Parses coordinate text such as `"e2"`.
    pub fn from_notation(text: &str) -> Result<Square> {
        let mut chars = text.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => (f.to_ascii_lowercase(), r),
            _ => return Err(GameError::InvalidSquare(text.to_string())),
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(GameError::InvalidSquare(text.to_string()));
        }
        Ok(Square {
            row: b'8' - rank as u8,
            col: file as u8 - b'a',
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}
