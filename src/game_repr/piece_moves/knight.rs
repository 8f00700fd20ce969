use crate::game_repr::{GameState, MoveList, Piece, Square};

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl GameState {
    pub(crate) fn knight_moves_into(&self, square: Square, knight: Piece, moves: &mut MoveList) {
        self.step_moves_into(square, knight, &KNIGHT_OFFSETS, moves);
    }
}
