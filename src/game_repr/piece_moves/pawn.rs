use crate::game_repr::{GameState, Move, MoveList, Piece, Square};

impl GameState {
    pub(crate) fn pawn_moves_into(&self, square: Square, pawn: Piece, moves: &mut MoveList) {
        let board = self.board();
        let forward = pawn.color.forward();

        if let Some(one) = square.offset(forward, 0) {
            if board.is_empty(one) {
                moves.push(Move::new(square, one, pawn, board));

                if square.row() == pawn.color.pawn_start_row() {
                    if let Some(two) = square.offset(2 * forward, 0) {
                        if board.is_empty(two) {
                            moves.push(Move::new(square, two, pawn, board));
                        }
                    }
                }
            }
        }

        // left then right
        for dc in [-1, 1] {
            let Some(target) = square.offset(forward, dc) else {
                continue;
            };
            if board.holds(target, pawn.color.opposite()) {
                moves.push(Move::new(square, target, pawn, board));
            } else if pawn.color == self.side_to_move() && self.en_passant_target() == Some(target) {
                moves.push(Move::en_passant(square, target, pawn));
            }
        }
    }
}
