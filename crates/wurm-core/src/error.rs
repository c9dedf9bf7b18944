use crate::config::{MAX_BOARD, MIN_BOARD};

/// Alias for `Result<T, WurmError>`.
pub type WurmResult<T> = Result<T, WurmError>;

/// Errors that can occur while configuring or presenting a game.
///
/// Simulation outcomes (wall, self, and obstacle collisions) are not errors;
/// they end the game through [`crate::Game::is_finished`].
#[derive(Debug, thiserror::Error)]
pub enum WurmError {
    /// The requested board does not fit the allowed size range.
    #[error("invalid board size: {width}x{height} (each side must be {}..={})", MIN_BOARD, MAX_BOARD)]
    Board {
        /// Requested board width, wall border included.
        width: i32,
        /// Requested board height, wall border included.
        height: i32,
    },

    /// A frontend failed to acquire or drive its display.
    #[error("frontend error: {0}")]
    Frontend(String),
}
