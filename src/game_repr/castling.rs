use super::{Board, Color, Move, Piece, PieceType, Square};

/// Castling availability per color and side. Rights are only ever lost
/// while playing forward; undo restores an earlier snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub black_king_side: bool,
    pub white_queen_side: bool,
    pub black_queen_side: bool,
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastlingRights {
    pub const fn all() -> Self {
        Self {
            white_king_side: true,
            black_king_side: true,
            white_queen_side: true,
            black_queen_side: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            white_king_side: false,
            black_king_side: false,
            white_queen_side: false,
            black_queen_side: false,
        }
    }

    pub fn king_side(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_side,
            Color::Black => self.black_king_side,
        }
    }

    pub fn queen_side(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queen_side,
            Color::Black => self.black_queen_side,
        }
    }

    fn revoke_king_side(&mut self, color: Color) {
        match color {
            Color::White => self.white_king_side = false,
            Color::Black => self.black_king_side = false,
        }
    }

    fn revoke_queen_side(&mut self, color: Color) {
        match color {
            Color::White => self.white_queen_side = false,
            Color::Black => self.black_queen_side = false,
        }
    }

    /// Drops the right tied to a rook home square, if `square` is one.
    fn revoke_rook_square(&mut self, square: Square) {
        for color in [Color::White, Color::Black] {
            if square.row() != color.back_rank() {
                continue;
            }
            match square.col() {
                0 => self.revoke_queen_side(color),
                7 => self.revoke_king_side(color),
                _ => {}
            }
        }
    }

    /// Keeps only the rights whose king and rook stand on their home squares.
    pub fn restricted_to(&self, board: &Board) -> Self {
        let mut rights = *self;
        for color in [Color::White, Color::Black] {
            let row = color.back_rank() as u8;
            let at_home = |col: u8, piece_type: PieceType| {
                board.get(Square::at(row, col)) == Some(Piece::new(color, piece_type))
            };
            if !at_home(4, PieceType::King) {
                rights.revoke_king_side(color);
                rights.revoke_queen_side(color);
            }
            if !at_home(7, PieceType::Rook) {
                rights.revoke_king_side(color);
            }
            if !at_home(0, PieceType::Rook) {
                rights.revoke_queen_side(color);
            }
        }
        rights
    }

    /// Applies the loss of rights caused by `mv`.
    pub fn update(&mut self, mv: &Move) {
        let mover = mv.piece_moved();
        match mover.piece_type {
            PieceType::King => {
                self.revoke_king_side(mover.color);
                self.revoke_queen_side(mover.color);
            }
            PieceType::Rook if mv.start().row() == mover.color.back_rank() => {
                self.revoke_rook_square(mv.start());
            }
            _ => {}
        }
        // Covers captures of a rook still on its home square.
        self.revoke_rook_square(mv.end());
    }
}
