use super::*;

fn kiwipete() -> GameState {
    position(
        [
            "r...k..r",
            "p.ppqpb.",
            "bn..pnp.",
            "...PN...",
            ".p..P...",
            "..N..Q.p",
            "PPPBBPPP",
            "R...K..R",
        ],
        Color::White,
        CastlingRights::all(),
    )
}

#[test]
fn test_perft_kiwipete_depth_1() {
    assert_eq!(kiwipete().perft(1), 48);
}

#[test]
fn test_perft_kiwipete_depth_2() {
    assert_eq!(kiwipete().perft(2), 2039);
}

#[test]
fn test_perft_kiwipete_depth_3() {
    assert_eq!(kiwipete().perft(3), 97862);
}
