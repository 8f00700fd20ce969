//! Cross-checks legal move generation against the `chess` crate.
//!
//! Plays seeded random games, comparing the legal move sets and the
//! terminal state at every ply, then takes every move back and checks the
//! initial position comes back exactly.

use std::collections::BTreeSet;

use chess::{BoardStatus, ChessMove, MoveGen};
use chess_rules::{AutoQueen, Board, GameState, Square};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const GAMES: u64 = 24;
const MAX_PLIES: usize = 120;

/// The reference generator lists one move per promotion piece; we list
/// one per destination, so compare on coordinates only.
fn reference_moves(board: &chess::Board) -> BTreeSet<String> {
    MoveGen::new_legal(board)
        .map(|mv| mv.to_string()[..4].to_string())
        .collect()
}

fn our_moves(state: &mut GameState) -> BTreeSet<String> {
    state.valid_moves().iter().map(|mv| mv.notation()).collect()
}

fn reference_move(board: &chess::Board, notation: &str) -> ChessMove {
    MoveGen::new_legal(board)
        .find(|mv| {
            let text = mv.to_string();
            text == notation || text == format!("{}q", notation)
        })
        .unwrap_or_else(|| panic!("reference has no move {}", notation))
}

fn play_random_game(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::new();
    let mut reference = chess::Board::default();
    let mut played = Vec::new();

    for ply in 0..MAX_PLIES {
        let ours = our_moves(&mut state);
        let theirs = reference_moves(&reference);
        assert_eq!(
            ours, theirs,
            "seed {} ply {} after {:?}\n{}",
            seed,
            ply,
            played,
            state.board()
        );

        match reference.status() {
            BoardStatus::Checkmate => {
                assert!(state.is_checkmate(), "seed {} ply {}: missed checkmate", seed, ply);
                break;
            }
            BoardStatus::Stalemate => {
                assert!(state.is_stalemate(), "seed {} ply {}: missed stalemate", seed, ply);
                break;
            }
            BoardStatus::Ongoing => {
                assert!(!state.is_checkmate() && !state.is_stalemate());
            }
        }
        assert_eq!(state.in_check(), reference.checkers().popcnt() > 0);

        let legal = state.valid_moves();
        let mv = legal[rng.gen_range(0..legal.len())];
        let applied = state.make_move(mv, &mut AutoQueen).unwrap();
        assert_eq!(applied, mv);

        reference = reference.make_move_new(reference_move(&reference, &mv.notation()));
        played.push(mv.notation());
    }

    for _ in 0..played.len() {
        assert!(state.undo_move().is_some());
    }
    assert!(state.undo_move().is_none());
    assert_eq!(*state.board(), Board::default());
    assert_eq!(state.valid_moves().len(), 20);
}

#[test]
fn test_random_games_match_reference() {
    for seed in 0..GAMES {
        play_random_game(seed);
    }
}

#[test]
fn test_initial_position_matches_reference() {
    let mut state = GameState::new();
    assert_eq!(our_moves(&mut state), reference_moves(&chess::Board::default()));
}

#[test]
fn test_coordinates_agree_with_reference() {
    let e2 = Square::from_notation("e2").unwrap();
    let e4 = Square::from_notation("e4").unwrap();
    let state = GameState::new();
    let mv = state.find_move(e2, e4).unwrap();
    let reference = reference_move(&chess::Board::default(), &mv.notation());
    assert_eq!(reference.get_source(), chess::Square::E2);
    assert_eq!(reference.get_dest(), chess::Square::E4);
}
