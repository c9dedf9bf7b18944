//! Shared winit plumbing for the graphical frontends.
//!
//! winit permits one event loop per process, while the canvas and gpu
//! frontends come and go as the player swaps them mid-game. The loop and the
//! window therefore live here, behind a thread-local host that frontends
//! borrow during their lifecycle calls.

/// The process-wide event loop and window owner.
pub mod host;
/// Logical-key to command translation.
pub mod keymap;

/// Re-export the host and its accessor.
pub use host::{WindowHost, with_host};
