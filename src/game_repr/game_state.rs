use log::{debug, info, trace, warn};

use super::*;
use crate::error::{GameError, Result};

/*
 * MODULE IS RESPONSIBLE FOR
 * MAKING, UNDOING AND VALIDATING MOVES
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    white_king: Square,
    black_king: Square,
    castling: CastlingRights,
    /// One entry per made move plus the starting rights; the top equals `castling`.
    castling_log: Vec<CastlingRights>,
    en_passant: Option<Square>,
    /// Same shape as `castling_log`, for the en passant target.
    en_passant_log: Vec<Option<Square>>,
    move_log: Vec<Move>,
    /// Legal moves of the current position, refreshed after every make/undo.
    legal_moves: Vec<Move>,
    checkmate: bool,
    stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        let mut state = Self::assemble(
            Board::default(),
            Color::White,
            Square::at(7, 4),
            Square::at(0, 4),
            CastlingRights::all(),
        );
        state.refresh();
        state
    }
}

impl GameState {
    /// The standard initial position, white to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// A custom position. Each color needs exactly one king and the side
    /// not to move may not be in check. Rights whose king or rook is off
    /// its home square are dropped.
    pub fn from_board(board: Board, side_to_move: Color, rights: CastlingRights) -> Result<Self> {
        let white = board.kings(Color::White);
        let black = board.kings(Color::Black);
        let (white_king, black_king) = match (white.as_slice(), black.as_slice()) {
            ([w], [b]) => (*w, *b),
            _ => {
                return Err(GameError::InvalidPosition(format!(
                    "expected one king per color, found {} white and {} black",
                    white.len(),
                    black.len()
                )))
            }
        };

        let rights = rights.restricted_to(&board);
        let mut state = Self::assemble(board, side_to_move, white_king, black_king, rights);

        let waiting = side_to_move.opposite();
        if state.is_square_attacked(state.king_location(waiting), side_to_move) {
            return Err(GameError::InvalidPosition(format!(
                "{:?} is in check but it is {:?} to move",
                waiting, side_to_move
            )));
        }

        state.refresh();
        Ok(state)
    }

    fn assemble(
        board: Board,
        side_to_move: Color,
        white_king: Square,
        black_king: Square,
        castling: CastlingRights,
    ) -> Self {
        Self {
            board,
            side_to_move,
            white_king,
            black_king,
            castling,
            castling_log: vec![castling],
            en_passant: None,
            en_passant_log: vec![None],
            move_log: Vec::new(),
            legal_moves: Vec::new(),
            checkmate: false,
            stalemate: false,
        }
    }

    /// Back to the initial position with an empty history.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn king_location(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    pub fn last_move(&self) -> Option<Move> {
        self.move_log.last().copied()
    }

    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    pub fn status(&self) -> GameStatus {
        if self.checkmate {
            GameStatus::Checkmate
        } else if self.stalemate {
            GameStatus::Stalemate
        } else if self.in_check() {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        }
    }

    /// Recomputes the legal moves of the position (and the terminal flags)
    /// and returns them in generation order.
    pub fn valid_moves(&mut self) -> Vec<Move> {
        self.refresh();
        self.legal_moves.clone()
    }

    /// Legal moves as of the last make/undo/query.
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    pub fn find_move(&self, start: Square, end: Square) -> Option<Move> {
        self.legal_moves
            .iter()
            .find(|m| m.start() == start && m.end() == end)
            .copied()
    }

    /// Plays `mv` if it is legal in the current position. Moves compare by
    /// coordinates, so the stored legal move (with its flags) is what gets
    /// applied and returned. `promotion` is asked for a piece kind only when
    /// the move promotes.
    pub fn make_move<P>(&mut self, mv: Move, promotion: &mut P) -> Result<Move>
    where
        P: PromotionHandler + ?Sized,
    {
        let Some(&legal) = self.legal_moves.iter().find(|&&m| m == mv) else {
            warn!("rejected illegal move {}", mv);
            return Err(GameError::IllegalMove {
                notation: mv.notation(),
            });
        };

        let choice = if legal.is_pawn_promotion() {
            promotion.choose(legal.color(), legal.end())
        } else {
            Promotion::Queen
        };

        self.apply(legal, choice);
        debug!("{:?} played {} ({:?})", legal.color(), legal, legal.move_type());
        self.refresh();
        Ok(legal)
    }

    /// Takes back the last move. Returns `None`, changing nothing, when
    /// there is no history.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.revert()?;
        debug!("undid {}", mv);
        self.refresh();
        Some(mv)
    }

    /// Counts leaf nodes of the legal move tree. Promotions count once per
    /// destination since the piece kind is chosen outside move generation.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.apply(mv, Promotion::Queen);
            nodes += self.perft(depth - 1);
            self.revert();
        }
        nodes
    }

    fn refresh(&mut self) {
        self.legal_moves = self.generate_legal_moves();

        if self.legal_moves.is_empty() {
            self.checkmate = self.in_check();
            self.stalemate = !self.checkmate;
            if self.checkmate {
                info!("checkmate, {:?} has no legal moves", self.side_to_move);
            } else {
                info!("stalemate, {:?} has no legal moves", self.side_to_move);
            }
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }
        trace!("{} legal moves for {:?}", self.legal_moves.len(), self.side_to_move);
    }

    /// Pseudo-legal moves that do not leave the mover's king attacked,
    /// then castling.
    fn generate_legal_moves(&mut self) -> Vec<Move> {
        #[cfg(debug_assertions)]
        let snapshot = (self.board, self.side_to_move, self.castling, self.en_passant);

        let mover = self.side_to_move;
        let candidates = self.pseudo_moves_for(mover);
        let mut legal = Vec::with_capacity(candidates.len() + 2);

        for mv in candidates {
            self.apply(mv, Promotion::Queen);
            let exposed = self.is_square_attacked(self.king_location(mover), mover.opposite());
            self.revert();
            if !exposed {
                legal.push(mv);
            }
        }

        #[cfg(debug_assertions)]
        debug_assert_eq!(
            snapshot,
            (self.board, self.side_to_move, self.castling, self.en_passant),
            "speculative make/undo changed the position"
        );

        self.castle_moves_into(&mut legal);
        legal
    }

    /// Applies any pseudo-legal move. No validation, no status refresh.
    fn apply(&mut self, mv: Move, promotion: Promotion) {
        let mover = mv.piece_moved();

        self.board.set(mv.start(), None);
        self.board.set(mv.end(), Some(mover));
        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.opposite();

        if mover.piece_type == PieceType::King {
            self.set_king_location(mover.color, mv.end());
        }

        match mv.move_type() {
            MoveType::Promotion => {
                self.board
                    .set(mv.end(), Some(Piece::new(mover.color, promotion.piece_type())));
            }
            MoveType::EnPassant => self.board.set(mv.en_passant_victim(), None),
            MoveType::Castling => {
                let (rook_from, rook_to) = mv.rook_squares();
                self.board.set(rook_to, self.board.get(rook_from));
                self.board.set(rook_from, None);
            }
            MoveType::Normal => {}
        }

        let double_step = mover.piece_type == PieceType::Pawn
            && mv.start().row().abs_diff(mv.end().row()) == 2;
        self.en_passant = if double_step {
            let passed = (mv.start().row() + mv.end().row()) / 2;
            Some(Square::at(passed as u8, mv.start().col() as u8))
        } else {
            None
        };
        self.en_passant_log.push(self.en_passant);

        self.castling.update(&mv);
        self.castling_log.push(self.castling);

        self.debug_assert_kings();
    }

    /// Exact inverse of `apply` for the last move in the log.
    fn revert(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;
        let mover = mv.piece_moved();

        self.board.set(mv.start(), Some(mover));
        self.board.set(mv.end(), mv.piece_captured());
        self.side_to_move = self.side_to_move.opposite();

        if mover.piece_type == PieceType::King {
            self.set_king_location(mover.color, mv.start());
        }

        match mv.move_type() {
            MoveType::EnPassant => {
                self.board.set(mv.end(), None);
                self.board.set(mv.en_passant_victim(), mv.piece_captured());
            }
            MoveType::Castling => {
                let (rook_from, rook_to) = mv.rook_squares();
                self.board.set(rook_from, self.board.get(rook_to));
                self.board.set(rook_to, None);
            }
            MoveType::Normal | MoveType::Promotion => {}
        }

        self.en_passant_log.pop();
        if let Some(&target) = self.en_passant_log.last() {
            self.en_passant = target;
        }
        self.castling_log.pop();
        if let Some(&rights) = self.castling_log.last() {
            self.castling = rights;
        }

        self.debug_assert_kings();
        Some(mv)
    }

    fn set_king_location(&mut self, color: Color, square: Square) {
        match color {
            Color::White => self.white_king = square,
            Color::Black => self.black_king = square,
        }
    }

    fn debug_assert_kings(&self) {
        debug_assert_eq!(self.board.kings(Color::White), vec![self.white_king]);
        debug_assert_eq!(self.board.kings(Color::Black), vec![self.black_king]);
    }
}
