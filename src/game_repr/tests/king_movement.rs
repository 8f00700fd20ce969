use super::*;

// ==================== KING MOVEMENT TESTS ====================

#[test]
fn test_king_moves_all_directions() {
    let state = position(
        [
            ".......k",
            "........",
            "........",
            "........",
            "...K....",
            "........",
            "........",
            "........",
        ],
        Color::White,
        CastlingRights::none(),
    );

    let moves = moves_from(&state, "d4");

    assert_eq!(moves.len(), 8, "King should have 8 moves from center");
    for target in ["c5", "d5", "e5", "c4", "e4", "c3", "d3", "e3"] {
        assert!(has_move(&moves, "d4", target), "missing d4{}", target);
    }
    // offsets are scanned from the upper-left neighbour
    assert_eq!(moves[0].end(), sq("c5"));
}

#[test]
fn test_king_in_corner() {
    let state = position(
        [
            ".......k",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "K.......",
        ],
        Color::White,
        CastlingRights::none(),
    );

    let moves = moves_from(&state, "a1");
    assert_eq!(moves.len(), 3);
    assert!(has_move(&moves, "a1", "a2"));
    assert!(has_move(&moves, "a1", "b1"));
    assert!(has_move(&moves, "a1", "b2"));
}

#[test]
fn test_king_cannot_step_into_attack() {
    let state = position(
        [
            "...r...k",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "....K...",
        ],
        Color::White,
        CastlingRights::none(),
    );

    let moves = moves_from(&state, "e1");
    assert_eq!(moves.len(), 3, "d1 and d2 are covered by the rook");
    assert!(!has_move(&moves, "e1", "d1"));
    assert!(!has_move(&moves, "e1", "d2"));
    assert!(has_move(&moves, "e1", "f2"));
}

#[test]
fn test_king_cannot_capture_protected_piece() {
    let state = position(
        [
            ".......k",
            "........",
            "........",
            "........",
            "........",
            "...p....",
            "....p...",
            "....K...",
        ],
        Color::White,
        CastlingRights::none(),
    );

    let moves = moves_from(&state, "e1");
    assert!(!has_move(&moves, "e1", "e2"), "e2 is defended by d3");
    assert!(!has_move(&moves, "e1", "d1"), "d1 is covered by the e2 pawn");
    assert!(!has_move(&moves, "e1", "f1"), "f1 is covered by the e2 pawn");
    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, "e1", "d2"));
    assert!(has_move(&moves, "e1", "f2"));
}

#[test]
fn test_king_location_tracks_moves() {
    let mut state = GameState::new();
    play_all(&mut state, &["e2e4", "e7e5", "e1e2", "e8e7"]);

    assert_eq!(state.king_location(Color::White), sq("e2"));
    assert_eq!(state.king_location(Color::Black), sq("e7"));

    state.undo_move();
    assert_eq!(state.king_location(Color::Black), sq("e8"));
}
