mod attacks;
mod board;
mod castling;
mod game_state;
mod moves;
mod piece;
mod piece_moves;
mod promotion;
mod square;

#[cfg(test)]
mod tests;

pub use board::*;
pub use castling::*;
pub use game_state::*;
pub use moves::*;
pub use piece::*;
pub use promotion::*;
pub use square::*;
