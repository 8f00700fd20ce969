use super::{Color, GameState, MoveList, PieceType, Square};

impl GameState {
    /// True if any piece of `by` covers `square`.
    ///
    /// Coverage is the attacker's pseudo-legal destinations, except that
    /// pawns cover their two forward diagonals whether or not anything
    /// stands there, and never the squares they push to.
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        let mut moves = MoveList::new();
        for (from, piece) in self.board().pieces() {
            if !piece.is(by) {
                continue;
            }
            if piece.piece_type == PieceType::Pawn {
                let forward = by.forward();
                if [-1, 1].iter().any(|&dc| from.offset(forward, dc) == Some(square)) {
                    return true;
                }
                continue;
            }
            moves.clear();
            self.piece_moves_into(from, piece, &mut moves);
            if moves.iter().any(|m| m.end() == square) {
                return true;
            }
        }
        false
    }

    /// True if the side not to move covers `square`.
    pub fn is_attacked(&self, square: Square) -> bool {
        self.is_square_attacked(square, self.side_to_move().opposite())
    }

    /// True if the side to move has its king attacked.
    pub fn in_check(&self) -> bool {
        self.is_attacked(self.king_location(self.side_to_move()))
    }
}
