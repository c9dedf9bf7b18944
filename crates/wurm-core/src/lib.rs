//! Core simulation for Wurm: board geometry, the snake, and the game state
//! machine that frontends render.
//!
//! This crate is presentation-free. Frontends receive a [`Game`] by shared
//! reference and draw it; the session loop in `wurm-session` feeds it input
//! and calls [`Game::update`] once per tick.

/// Backend-agnostic input commands and frontend identifiers.
pub mod command;
/// Game construction parameters and board size limits.
pub mod config;
/// Error types used throughout the workspace.
pub mod error;
/// Game state: board, food, obstacles, score, and the tick rules.
pub mod game;
/// Grid positions and movement directions.
pub mod geometry;
/// The snake body and its movement rules.
pub mod snake;

/// Re-export the command vocabulary.
pub use command::{Command, FrontendId};
/// Re-export configuration types.
pub use config::GameConfig;
/// Re-export error types.
pub use error::{WurmError, WurmResult};
/// Re-export the game state.
pub use game::Game;
/// Re-export geometry types.
pub use geometry::{Direction, Point};
/// Re-export the snake.
pub use snake::Snake;
