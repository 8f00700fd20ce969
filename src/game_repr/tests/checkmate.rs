use super::*;

// ==================== CHECKMATE TESTS ====================

#[test]
fn test_fools_mate() {
    let mut state = GameState::new();
    play_all(&mut state, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    let moves = state.valid_moves();
    assert!(moves.is_empty(), "White should have no legal moves");
    assert!(state.is_checkmate(), "Should be checkmate (Fool's mate)");
    assert!(!state.is_stalemate());
    assert_eq!(state.status(), GameStatus::Checkmate);
}

#[test]
fn test_scholars_mate() {
    let mut state = GameState::new();
    play_all(
        &mut state,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );

    assert_eq!(state.side_to_move(), Color::Black);
    assert!(state.is_checkmate(), "Should be checkmate (Scholar's mate)");
}

#[test]
fn test_back_rank_mate() {
    let state = position(
        [
            "k.......",
            "........",
            "........",
            "........",
            "........",
            "........",
            ".....PPP",
            "r.....K.",
        ],
        Color::White,
        CastlingRights::none(),
    );

    assert!(state.in_check());
    assert!(state.is_checkmate(), "Should be back rank mate");
    assert!(state.legal_moves().is_empty());
}

#[test]
fn test_not_checkmate_can_block() {
    let state = position(
        [
            "k...r...",
            "........",
            "........",
            "........",
            "........",
            ".....B..",
            "........",
            "....K...",
        ],
        Color::White,
        CastlingRights::none(),
    );

    assert!(state.in_check());
    assert!(!state.is_checkmate(), "Not checkmate - can block with bishop");
    assert!(has_move(state.legal_moves(), "f3", "e2"));
    assert!(has_move(state.legal_moves(), "f3", "e4"));
}

#[test]
fn test_not_checkmate_can_capture() {
    let state = position(
        [
            "k.......",
            "........",
            "........",
            "........",
            "....K...",
            "........",
            "........",
            "....q..R",
        ],
        Color::White,
        CastlingRights::none(),
    );

    assert!(state.in_check());
    assert!(!state.is_checkmate(), "Not checkmate - rook takes the queen");
    assert!(has_move(state.legal_moves(), "h1", "e1"));
}
