//! The contract every renderer frontend satisfies, and the factory the
//! session uses to build one.

use wurm_core::command::{Command, FrontendId};
use wurm_core::error::WurmResult;
use wurm_core::game::Game;

/// A pluggable presentation surface: drawing plus input for one game.
///
/// Implementations are driven from a single thread in a fixed order:
/// [`Frontend::init`] first, then any number of `poll_input`/`render`
/// rounds, then at most one banner, then [`Frontend::release`]. `release`
/// must be idempotent, must be safe after a failed `init`, and must leave
/// the terminal or display usable by whatever frontend comes next; that
/// is what makes hot-swapping work.
pub trait Frontend {
    /// Acquire display resources sized to a `width` by `height` cell board.
    /// Failure here is fatal to the session, never retried.
    fn init(&mut self, width: i32, height: i32) -> WurmResult<()>;

    /// Draw one frame from read-only game state.
    fn render(&mut self, game: &Game) -> WurmResult<()>;

    /// Non-blocking input poll: drain whatever is pending and return the
    /// most recent mapped command, or [`Command::None`]. Must return
    /// promptly; the session is a tight poll loop.
    fn poll_input(&mut self) -> Command;

    /// Victory banner; blocks until the user dismisses it.
    fn show_victory(&mut self) -> WurmResult<()>;

    /// Game-over banner; blocks until the user dismisses it.
    fn show_game_over(&mut self) -> WurmResult<()>;

    /// Tear down everything `init` acquired.
    fn release(&mut self);
}

/// Builds frontends by identity, on startup and on every hot-swap.
///
/// The binary provides the registry over the three real frontends; tests
/// supply scripted fakes. A failed `create` is fatal to the session; no
/// fallback frontend is substituted.
pub trait FrontendFactory {
    /// Construct the frontend named by `id`, not yet initialized.
    fn create(&mut self, id: FrontendId) -> WurmResult<Box<dyn Frontend>>;
}
