//! Chess rules engine: legal move generation, make/undo and terminal
//! state detection, plus a thin terminal front end.

pub mod error;
pub mod game_repr;
pub mod terminal;

pub use error::{GameError, Result};
pub use game_repr::{
    AutoQueen, Board, CastlingRights, Color, GameState, GameStatus, Move, MoveType, Piece,
    PieceType, Promotion, PromotionHandler, Square,
};
