use crate::game_repr::{GameState, Move, MoveList, Piece, Square};

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl GameState {
    /// Adjacent squares only. Castling is produced by `castle_moves_into`.
    pub(crate) fn king_moves_into(&self, square: Square, king: Piece, moves: &mut MoveList) {
        self.step_moves_into(square, king, &KING_OFFSETS, moves);
    }

    /// Castling for the side to move, appended after legality filtering.
    /// The king may not start on, cross, or land on an attacked square;
    /// on the queen side the b-file square must be empty but may be attacked.
    pub(crate) fn castle_moves_into(&self, moves: &mut Vec<Move>) {
        let color = self.side_to_move();
        let enemy = color.opposite();
        let king_square = self.king_location(color);
        let board = self.board();
        let Some(king) = board.get(king_square) else {
            return;
        };
        if self.is_square_attacked(king_square, enemy) {
            return;
        }

        let rights = self.castling_rights();
        let empty_and_safe = |sq: Square| board.is_empty(sq) && !self.is_square_attacked(sq, enemy);

        if rights.king_side(color) {
            if let (Some(f), Some(g)) = (king_square.offset(0, 1), king_square.offset(0, 2)) {
                if empty_and_safe(f) && empty_and_safe(g) {
                    moves.push(Move::castle(king_square, g, king));
                }
            }
        }

        if rights.queen_side(color) {
            if let (Some(d), Some(c), Some(b)) = (
                king_square.offset(0, -1),
                king_square.offset(0, -2),
                king_square.offset(0, -3),
            ) {
                if empty_and_safe(d) && empty_and_safe(c) && board.is_empty(b) {
                    moves.push(Move::castle(king_square, c, king));
                }
            }
        }
    }
}
