use std::fmt;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;

use super::{Board, Color, Piece, PieceType, Square};

/// Buffer used by the per-piece generators.
pub type MoveList = SmallVec<[Move; 64]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    Normal,
    Promotion,
    EnPassant,
    Castling,
}

/// One ply, built from the board as it stood when the move was generated.
///
/// Equality and hashing use only the packed coordinates:
/// | 6 bits | 6 bits |
/// | start  |  end   |
#[derive(Debug, Clone, Copy)]
pub struct Move {
    start: Square,
    end: Square,
    piece_moved: Piece,
    piece_captured: Option<Piece>,
    move_type: MoveType,
    id: u16,
}

impl Move {
    pub(crate) fn new(start: Square, end: Square, piece_moved: Piece, board: &Board) -> Move {
        let promotes = piece_moved.piece_type == PieceType::Pawn
            && end.row() == piece_moved.color.promotion_row();
        let move_type = if promotes {
            MoveType::Promotion
        } else {
            MoveType::Normal
        };
        Self::build(start, end, piece_moved, board.get(end), move_type)
    }

    /// The captured pawn is synthesized: the destination square is empty.
    pub(crate) fn en_passant(start: Square, end: Square, piece_moved: Piece) -> Move {
        let captured = Piece::new(piece_moved.color.opposite(), PieceType::Pawn);
        Self::build(start, end, piece_moved, Some(captured), MoveType::EnPassant)
    }

    pub(crate) fn castle(start: Square, end: Square, king: Piece) -> Move {
        Self::build(start, end, king, None, MoveType::Castling)
    }

    fn build(
        start: Square,
        end: Square,
        piece_moved: Piece,
        piece_captured: Option<Piece>,
        move_type: MoveType,
    ) -> Move {
        let id = ((start.index() as u16) << 6) | end.index() as u16;
        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            move_type,
            id,
        }
    }

    pub fn start(&self) -> Square {
        self.start
    }

    pub fn end(&self) -> Square {
        self.end
    }

    pub fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    pub fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    pub fn move_type(&self) -> MoveType {
        self.move_type
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn color(&self) -> Color {
        self.piece_moved.color
    }

    pub fn is_pawn_promotion(&self) -> bool {
        self.move_type == MoveType::Promotion
    }

    pub fn is_en_passant(&self) -> bool {
        self.move_type == MoveType::EnPassant
    }

    pub fn is_castle(&self) -> bool {
        self.move_type == MoveType::Castling
    }

    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Square of the pawn removed by an en passant capture.
    pub(crate) fn en_passant_victim(&self) -> Square {
        Square::at(self.start.row() as u8, self.end.col() as u8)
    }

    /// Rook (from, to) squares for a castling move.
    pub(crate) fn rook_squares(&self) -> (Square, Square) {
        let row = self.end.row() as u8;
        if self.end.col() > self.start.col() {
            (Square::at(row, 7), Square::at(row, self.end.col() as u8 - 1))
        } else {
            (Square::at(row, 0), Square::at(row, self.end.col() as u8 + 1))
        }
    }

    /// Coordinate notation, start then end, e.g. `e2e4`.
    pub fn notation(&self) -> String {
        format!("{}{}", self.start, self.end)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}
