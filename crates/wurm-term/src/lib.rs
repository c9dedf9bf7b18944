//! Terminal-cell frontend for Wurm.
//!
//! Renders the board as styled character cells through ratatui on an
//! alternate screen, and polls crossterm key events without blocking. Swap
//! key `1` selects this frontend at runtime.

/// Frame drawing: board grid, score line, help overlay, and banners.
pub mod draw;
/// The [`wurm_session::Frontend`] implementation.
pub mod frontend;
/// Crossterm key to command translation.
pub mod keymap;

/// Re-export the frontend.
pub use frontend::TermFrontend;
