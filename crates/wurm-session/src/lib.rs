//! Session orchestration for Wurm: the frontend contract every renderer
//! satisfies, the factory the binary plugs in, the tick loop, and the chaos
//! input transform.
//!
//! The session owns the [`wurm_core::Game`] and at most one live frontend
//! at a time. Hot-swapping releases the old frontend completely before the
//! new one initializes; the game is never shared between two frontends.

/// Caller-side control inversion.
pub mod chaos;
/// The frontend trait and the factory that builds frontends by identity.
pub mod frontend;
/// The poll-simulate-render tick loop.
pub mod session;

/// Re-export the frontend contract.
pub use frontend::{Frontend, FrontendFactory};
/// Re-export the session loop types.
pub use session::{Outcome, Session, SessionConfig, TICK_INTERVAL};
