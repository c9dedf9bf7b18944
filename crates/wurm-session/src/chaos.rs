//! Caller-side control inversion.
//!
//! Chaos mode is a pure input transform applied by the session before a
//! command reaches the game; the game itself never knows it is on.

use wurm_core::command::Command;

/// Invert the four movement commands (up/down and left/right swap); every
/// other command passes through unchanged.
pub fn invert(cmd: Command) -> Command {
    match cmd {
        Command::MoveUp => Command::MoveDown,
        Command::MoveDown => Command::MoveUp,
        Command::MoveLeft => Command::MoveRight,
        Command::MoveRight => Command::MoveLeft,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use wurm_core::command::FrontendId;

    use super::*;

    #[test]
    fn movement_commands_swap_pairwise() {
        assert_eq!(invert(Command::MoveUp), Command::MoveDown);
        assert_eq!(invert(Command::MoveDown), Command::MoveUp);
        assert_eq!(invert(Command::MoveLeft), Command::MoveRight);
        assert_eq!(invert(Command::MoveRight), Command::MoveLeft);
    }

    #[test]
    fn control_commands_pass_through() {
        assert_eq!(invert(Command::Exit), Command::Exit);
        assert_eq!(invert(Command::Help), Command::Help);
        assert_eq!(
            invert(Command::Switch(FrontendId::Canvas)),
            Command::Switch(FrontendId::Canvas)
        );
        assert_eq!(invert(Command::None), Command::None);
    }

    #[test]
    fn double_inversion_is_identity() {
        let commands = [
            Command::MoveUp,
            Command::MoveDown,
            Command::MoveLeft,
            Command::MoveRight,
            Command::Exit,
            Command::Help,
            Command::Switch(FrontendId::Terminal),
            Command::None,
        ];
        for cmd in commands {
            assert_eq!(invert(invert(cmd)), cmd);
        }
    }
}
