//! Terminal front end: argument parsing, board rendering and the command
//! loop. Holds no rules of its own; everything goes through `GameState`.

pub mod config;
pub mod render;
pub mod session;

pub use config::{ConfigError, PromotionPolicy, SessionConfig};
pub use render::render_board;
pub use session::{GameResult, Session};
