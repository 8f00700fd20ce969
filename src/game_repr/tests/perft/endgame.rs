use super::*;

fn rook_endgame() -> GameState {
    position(
        [
            "........",
            "..p.....",
            "...p....",
            "KP.....r",
            ".R...p.k",
            "........",
            "....P.P.",
            "........",
        ],
        Color::White,
        CastlingRights::none(),
    )
}

#[test]
fn test_perft_endgame_depth_1() {
    assert_eq!(rook_endgame().perft(1), 14);
}

#[test]
fn test_perft_endgame_depth_2() {
    assert_eq!(rook_endgame().perft(2), 191);
}

#[test]
fn test_perft_endgame_depth_3() {
    assert_eq!(rook_endgame().perft(3), 2812);
}
