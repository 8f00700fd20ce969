use crate::game_repr::{GameState, MoveList, Piece, Square};

/// Up, down, left, right.
pub(crate) const ORTHOGONALS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl GameState {
    pub(crate) fn rook_moves_into(&self, square: Square, rook: Piece, moves: &mut MoveList) {
        self.ray_moves_into(square, rook, &ORTHOGONALS, moves);
    }
}
