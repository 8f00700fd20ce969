pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use crate::game_repr::{Color, GameState, Move, MoveList, Piece, PieceType, Square};

impl GameState {
    /// Pseudo-legal moves for the side to move: piece rules only, king
    /// safety ignored, no castling.
    pub fn pseudo_legal_moves(&self) -> MoveList {
        self.pseudo_moves_for(self.side_to_move())
    }

    /// Scans the board row by row and appends each piece's moves in its
    /// fixed direction order.
    pub(crate) fn pseudo_moves_for(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (square, piece) in self.board().pieces() {
            if piece.is(color) {
                self.piece_moves_into(square, piece, &mut moves);
            }
        }
        moves
    }

    pub(crate) fn piece_moves_into(&self, square: Square, piece: Piece, moves: &mut MoveList) {
        match piece.piece_type {
            PieceType::Pawn => self.pawn_moves_into(square, piece, moves),
            PieceType::Knight => self.knight_moves_into(square, piece, moves),
            PieceType::Bishop => self.bishop_moves_into(square, piece, moves),
            PieceType::Rook => self.rook_moves_into(square, piece, moves),
            PieceType::Queen => self.queen_moves_into(square, piece, moves),
            PieceType::King => self.king_moves_into(square, piece, moves),
        }
    }

    /// Walks each direction until the edge, an ally (excluded) or an
    /// enemy (included).
    pub(crate) fn ray_moves_into(
        &self,
        square: Square,
        piece: Piece,
        directions: &[(i32, i32)],
        moves: &mut MoveList,
    ) {
        let board = self.board();
        for &(dr, dc) in directions {
            let mut current = square;
            while let Some(next) = current.offset(dr, dc) {
                match board.get(next) {
                    None => moves.push(Move::new(square, next, piece, board)),
                    Some(other) if other.color != piece.color => {
                        moves.push(Move::new(square, next, piece, board));
                        break;
                    }
                    Some(_) => break,
                }
                current = next;
            }
        }
    }

    /// Single jumps to each offset that is on the board and not an ally.
    pub(crate) fn step_moves_into(
        &self,
        square: Square,
        piece: Piece,
        offsets: &[(i32, i32)],
        moves: &mut MoveList,
    ) {
        let board = self.board();
        for &(dr, dc) in offsets {
            if let Some(target) = square.offset(dr, dc) {
                if !board.holds(target, piece.color) {
                    moves.push(Move::new(square, target, piece, board));
                }
            }
        }
    }
}
