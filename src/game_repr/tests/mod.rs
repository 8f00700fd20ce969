use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Square from coordinate text, e.g. `sq("e2")`
pub fn sq(name: &str) -> Square {
    Square::from_notation(name).unwrap()
}

/// Builds a position from an ASCII diagram (row 0 = rank 8)
pub fn position(rows: [&str; 8], side_to_move: Color, rights: CastlingRights) -> GameState {
    let board = Board::from_rows(rows).unwrap();
    GameState::from_board(board, side_to_move, rights).unwrap()
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.start() == sq(from) && m.end() == sq(to))
}

/// Legal moves of the piece standing on `from`
pub fn moves_from(state: &GameState, from: &str) -> Vec<Move> {
    state
        .legal_moves()
        .iter()
        .filter(|m| m.start() == sq(from))
        .copied()
        .collect()
}

/// Helper function to count moves of a specific type
pub fn count_move_type(moves: &[Move], move_type: MoveType) -> usize {
    moves.iter().filter(|m| m.move_type() == move_type).count()
}

/// Plays a legal move by coordinates, promoting to a queen
pub fn play(state: &mut GameState, from: &str, to: &str) -> Move {
    let mv = state
        .find_move(sq(from), sq(to))
        .unwrap_or_else(|| panic!("{}{} should be legal", from, to));
    state.make_move(mv, &mut AutoQueen).unwrap()
}

pub fn play_all(state: &mut GameState, moves: &[&str]) {
    for text in moves {
        play(state, &text[0..2], &text[2..4]);
    }
}

// ==================== TEST MODULES ====================

mod king_movement;
mod checkmate;
mod perft;
