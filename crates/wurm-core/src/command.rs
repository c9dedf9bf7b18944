//! The backend-agnostic input vocabulary shared by every frontend.

use crate::geometry::Direction;

/// One user action, as reported by a frontend's input poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Steer the snake upward.
    MoveUp,
    /// Steer the snake downward.
    MoveDown,
    /// Steer the snake leftward.
    MoveLeft,
    /// Steer the snake rightward.
    MoveRight,
    /// End the session after the current tick's render.
    Exit,
    /// Toggle the help overlay; the session pauses the simulation while it
    /// is shown.
    Help,
    /// Hot-swap to another frontend, keeping the game state.
    Switch(FrontendId),
    /// Nothing pending.
    None,
}

impl Command {
    /// The direction a movement command steers toward; `None` for every
    /// non-directional command.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::MoveUp => Some(Direction::Up),
            Command::MoveDown => Some(Direction::Down),
            Command::MoveLeft => Some(Direction::Left),
            Command::MoveRight => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Identifies one of the three renderer frontends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontendId {
    /// Terminal-cell renderer.
    Terminal,
    /// Software-rasterized window renderer.
    Canvas,
    /// GPU window renderer.
    Gpu,
}

impl FrontendId {
    /// All frontends in swap-key order.
    pub const ALL: [FrontendId; 3] = [FrontendId::Terminal, FrontendId::Canvas, FrontendId::Gpu];

    /// The 1-based swap key bound to this frontend.
    pub fn index(self) -> u8 {
        match self {
            FrontendId::Terminal => 1,
            FrontendId::Canvas => 2,
            FrontendId::Gpu => 3,
        }
    }

    /// Map a 1-based swap key back to a frontend.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(FrontendId::Terminal),
            2 => Some(FrontendId::Canvas),
            3 => Some(FrontendId::Gpu),
            _ => None,
        }
    }
}
