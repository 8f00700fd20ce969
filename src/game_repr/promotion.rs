use super::{Color, PieceType, Square};

/// Piece kinds a pawn may become.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Promotion {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl Promotion {
    pub fn piece_type(&self) -> PieceType {
        match self {
            Self::Queen => PieceType::Queen,
            Self::Rook => PieceType::Rook,
            Self::Bishop => PieceType::Bishop,
            Self::Knight => PieceType::Knight,
        }
    }

    /// Accepts `q`, `r`, `b`, `n` in either case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'q' => Some(Self::Queen),
            'r' => Some(Self::Rook),
            'b' => Some(Self::Bishop),
            'n' => Some(Self::Knight),
            _ => None,
        }
    }
}

/// Supplies the promoted piece kind while a promotion move is applied.
/// Called synchronously, before the destination square is written.
pub trait PromotionHandler {
    fn choose(&mut self, color: Color, square: Square) -> Promotion;
}

impl<F> PromotionHandler for F
where
    F: FnMut(Color, Square) -> Promotion,
{
    fn choose(&mut self, color: Color, square: Square) -> Promotion {
        self(color, square)
    }
}

/// Always promotes to a queen.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoQueen;

impl PromotionHandler for AutoQueen {
    fn choose(&mut self, _color: Color, _square: Square) -> Promotion {
        Promotion::Queen
    }
}
