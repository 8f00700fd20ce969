//! Line-oriented game session.
//!
//! A `Session` owns a `GameState` and drives it from text commands read
//! off any `BufRead`, writing the board and messages to any `Write`. The
//! binary wires it to stdin/stdout; tests use in-memory buffers.
//!
//! # Commands
//!
//! - `e2e4` - move by coordinates; a fifth letter (`e7e8n`) picks the
//!   promotion piece up front
//! - `undo` / `z` - take back the last move
//! - `reset` / `r` - back to the initial position
//! - `moves` - list the legal moves
//! - `help` - list commands
//! - `quit` / `q` - leave the session
//!
//! The game does not stop on checkmate or stalemate: the result is
//! reported and the position can still be undone or reset.

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use super::config::{PromotionPolicy, SessionConfig};
use super::render::render_board;
use crate::error::GameError;
use crate::game_repr::{
    AutoQueen, Color, GameState, GameStatus, Promotion, PromotionHandler, Square,
};

const HELP: &str = "\
commands:
  e2e4      move by coordinates (e7e8n promotes to a knight)
  undo, z   take back the last move
  reset, r  start over
  moves     list legal moves
  help      show this text
  quit, q   leave";

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black was checkmated
    WhiteWins,
    /// White was checkmated
    BlackWins,
    /// Side to move has no legal moves but is not in check
    Stalemate,
}

impl GameResult {
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// The result of `state`, if the game is over.
    pub fn of(state: &GameState) -> Option<Self> {
        if state.is_checkmate() {
            Some(Self::from_winner(state.side_to_move().opposite()))
        } else if state.is_stalemate() {
            Some(GameResult::Stalemate)
        } else {
            None
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            GameResult::WhiteWins => "checkmate, white wins",
            GameResult::BlackWins => "checkmate, black wins",
            GameResult::Stalemate => "stalemate, draw",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Move {
        start: Square,
        end: Square,
        promotion: Option<Promotion>,
    },
    Undo,
    Reset,
    Moves,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Command> {
        let word = line.trim().to_ascii_lowercase();
        let command = match word.as_str() {
            "undo" | "z" => Command::Undo,
            "reset" | "r" => Command::Reset,
            "moves" => Command::Moves,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => return Self::parse_move(&word),
        };
        Some(command)
    }

    fn parse_move(word: &str) -> Option<Command> {
        if !word.is_ascii() || !(4..=5).contains(&word.len()) {
            return None;
        }
        let start = Square::from_notation(&word[0..2]).ok()?;
        let end = Square::from_notation(&word[2..4]).ok()?;
        let promotion = match word[4..].chars().next() {
            Some(c) => Some(Promotion::from_char(c)?),
            None => None,
        };
        Some(Command::Move {
            start,
            end,
            promotion,
        })
    }
}

/// Asks for the promotion piece on the session's own streams.
struct PromptPromotion<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<R: BufRead, W: Write> PromptPromotion<'_, R, W> {
    fn ask(&mut self, color: Color, square: Square) -> io::Result<Promotion> {
        loop {
            write!(self.output, "promote {:?} pawn on {} to (q/r/b/n): ", color, square)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(Promotion::Queen);
            }

            let mut chars = line.trim().chars();
            match (chars.next().and_then(Promotion::from_char), chars.next()) {
                (Some(promotion), None) => return Ok(promotion),
                _ => writeln!(self.output, "please answer q, r, b or n")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> PromotionHandler for PromptPromotion<'_, R, W> {
    fn choose(&mut self, color: Color, square: Square) -> Promotion {
        self.ask(color, square).unwrap_or_else(|err| {
            warn!("promotion prompt failed ({}), promoting to queen", err);
            Promotion::Queen
        })
    }
}

pub struct Session<R, W> {
    input: R,
    output: W,
    state: GameState,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self::with_state(input, output, config, GameState::new())
    }

    /// Starts from an arbitrary position instead of the initial one.
    pub fn with_state(input: R, output: W, config: SessionConfig, state: GameState) -> Self {
        Self {
            input,
            output,
            state,
            config,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Runs commands until `quit` or end of input. Returns the result of
    /// the game as it stands when the session ends.
    pub fn run(&mut self) -> io::Result<Option<GameResult>> {
        self.show_position()?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            let Some(command) = Command::parse(&line) else {
                writeln!(self.output, "unrecognized input: {} (try 'help')", line.trim())?;
                continue;
            };
            debug!("session command {:?}", command);

            match command {
                Command::Move {
                    start,
                    end,
                    promotion,
                } => {
                    if let Err(err) = self.play(start, end, promotion) {
                        writeln!(self.output, "{}", err)?;
                        continue;
                    }
                    self.show_position()?;
                }
                Command::Undo => match self.state.undo_move() {
                    Some(mv) => {
                        writeln!(self.output, "took back {}", mv)?;
                        self.show_position()?;
                    }
                    None => writeln!(self.output, "{}", GameError::EmptyHistoryUndo)?,
                },
                Command::Reset => {
                    self.state.reset();
                    self.show_position()?;
                }
                Command::Moves => self.list_moves()?,
                Command::Help => writeln!(self.output, "{}", HELP)?,
                Command::Quit => break,
            }
        }

        Ok(GameResult::of(&self.state))
    }

    fn play(
        &mut self,
        start: Square,
        end: Square,
        promotion: Option<Promotion>,
    ) -> crate::error::Result<()> {
        let mv = self
            .state
            .find_move(start, end)
            .ok_or_else(|| GameError::IllegalMove {
                notation: format!("{}{}", start, end),
            })?;

        let mut fixed = |_: Color, _: Square| promotion.unwrap_or(Promotion::Queen);
        let mut auto = AutoQueen;
        let mut prompt = PromptPromotion {
            input: &mut self.input,
            output: &mut self.output,
        };
        let handler: &mut dyn PromotionHandler = match (promotion, self.config.promotion) {
            (Some(_), _) => &mut fixed,
            (None, PromotionPolicy::AutoQueen) => &mut auto,
            (None, PromotionPolicy::Prompt) => &mut prompt,
        };

        self.state.make_move(mv, handler)?;
        Ok(())
    }

    fn show_position(&mut self) -> io::Result<()> {
        write!(
            self.output,
            "\n{}",
            render_board(self.state.board(), self.config.pov)
        )?;

        match self.state.status() {
            GameStatus::Checkmate | GameStatus::Stalemate => {
                if let Some(result) = GameResult::of(&self.state) {
                    writeln!(self.output, "{}", result.describe())?;
                }
                return Ok(());
            }
            GameStatus::Check => {
                writeln!(self.output, "{:?} to move, check", self.state.side_to_move())?
            }
            GameStatus::Ongoing => writeln!(self.output, "{:?} to move", self.state.side_to_move())?,
        }

        if self.config.hints {
            self.list_moves()?;
        }
        Ok(())
    }

    fn list_moves(&mut self) -> io::Result<()> {
        let moves: Vec<String> = self
            .state
            .legal_moves()
            .iter()
            .map(|m| m.notation())
            .collect();
        writeln!(self.output, "moves: {}", moves.join(" "))
    }
}
