use std::fmt;
use std::ops::{Index, IndexMut};

use super::{Color, Piece, PieceType, Square};
use crate::error::{GameError, Result};

/// 8x8 grid of cells, indexed by [`Square`]. `None` is an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        use PieceType::*;
        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        let mut board = Self::empty();
        for (col, &kind) in back_rank.iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(Color::Black, kind));
            board.cells[1][col] = Some(Piece::new(Color::Black, Pawn));
            board.cells[6][col] = Some(Piece::new(Color::White, Pawn));
            board.cells[7][col] = Some(Piece::new(Color::White, kind));
        }
        board
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// Builds a board from an ASCII diagram, row 0 (rank 8) first.
    /// `.` is an empty cell, `PNBRQK` are white and `pnbrqk` black.
    pub fn from_rows(rows: [&str; 8]) -> Result<Self> {
        let mut board = Self::empty();
        for (row, text) in rows.iter().enumerate() {
            if text.chars().count() != 8 {
                return Err(GameError::InvalidPosition(format!(
                    "row {} must have 8 cells: {:?}",
                    row, text
                )));
            }
            for (col, c) in text.chars().enumerate() {
                let cell = match c {
                    '.' => None,
                    _ => Some(Piece::from_char(c).ok_or_else(|| {
                        GameError::InvalidPosition(format!("unknown piece {:?}", c))
                    })?),
                };
                board.cells[row][col] = cell;
            }
        }
        Ok(board)
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.row()][square.col()]
    }

    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row()][square.col()] = piece;
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// True if `square` holds a piece of `color`.
    pub fn holds(&self, square: Square, color: Color) -> bool {
        self.get(square).is_some_and(|p| p.is(color))
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    pub fn kings(&self, color: Color) -> Vec<Square> {
        let king = Piece::new(color, PieceType::King);
        self.pieces()
            .filter(|&(_, p)| p == king)
            .map(|(sq, _)| sq)
            .collect()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, square: Square) -> &Self::Output {
        &self.cells[square.row()][square.col()]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, square: Square) -> &mut Self::Output {
        &mut self.cells[square.row()][square.col()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let c = cell.map_or('.', |p| p.to_char());
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
