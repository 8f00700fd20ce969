use crate::game_repr::{GameState, MoveList, Piece, Square};

impl GameState {
    pub(crate) fn queen_moves_into(&self, square: Square, queen: Piece, moves: &mut MoveList) {
        self.rook_moves_into(square, queen, moves);
        self.bishop_moves_into(square, queen, moves);
    }
}
