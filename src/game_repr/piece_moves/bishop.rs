use crate::game_repr::{GameState, MoveList, Piece, Square};

pub(crate) const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl GameState {
    pub(crate) fn bishop_moves_into(&self, square: Square, bishop: Piece, moves: &mut MoveList) {
        self.ray_moves_into(square, bishop, &DIAGONALS, moves);
    }
}
