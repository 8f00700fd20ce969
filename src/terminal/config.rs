//! Session configuration for the terminal front end.
//!
//! Built from command-line flags. Everything has a default, so running the
//! binary without arguments starts a two-player game from White's side with
//! an interactive promotion prompt.

use thiserror::Error;

use crate::game_repr::Color;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("{option} requires a value")]
    MissingValue { option: &'static str },

    #[error("invalid value for {option}: {value}")]
    InvalidValue { option: &'static str, value: String },
}

/// How the piece kind is picked when a pawn reaches the last rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionPolicy {
    /// Ask on the terminal (q/r/b/n)
    Prompt,
    /// Always take a queen without asking
    AutoQueen,
}

/// Options for one terminal session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Side drawn at the bottom of the board
    pub pov: Color,
    pub promotion: PromotionPolicy,
    /// Print the legal moves after every board
    pub hints: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pov: Color::White,
            promotion: PromotionPolicy::Prompt,
            hints: false,
        }
    }
}

impl SessionConfig {
    /// Parses flags (program name already stripped).
    ///
    /// Recognized:
    /// * `--pov white|black`
    /// * `--auto-queen`
    /// * `--hints`
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--pov" => {
                    let value = args
                        .next()
                        .ok_or(ConfigError::MissingValue { option: "--pov" })?;
                    config.pov = match value.as_ref().to_ascii_lowercase().as_str() {
                        "white" | "w" => Color::White,
                        "black" | "b" => Color::Black,
                        other => {
                            return Err(ConfigError::InvalidValue {
                                option: "--pov",
                                value: other.to_string(),
                            })
                        }
                    };
                }
                "--auto-queen" => config.promotion = PromotionPolicy::AutoQueen,
                "--hints" => config.hints = true,
                other => return Err(ConfigError::UnknownOption(other.to_string())),
            }
        }

        Ok(config)
    }
}
