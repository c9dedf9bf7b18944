//! Translates winit logical keys into game commands.

use winit::keyboard::{Key, NamedKey};
use wurm_core::command::{Command, FrontendId};

/// Map a pressed logical key to a [`Command`].
///
/// Letters match case-insensitively so a stuck shift key does not stall the
/// snake. Unbound keys map to `None`.
pub fn map(key: &Key) -> Option<Command> {
    match key {
        Key::Named(NamedKey::ArrowUp) => Some(Command::MoveUp),
        Key::Named(NamedKey::ArrowDown) => Some(Command::MoveDown),
        Key::Named(NamedKey::ArrowLeft) => Some(Command::MoveLeft),
        Key::Named(NamedKey::ArrowRight) => Some(Command::MoveRight),
        Key::Named(NamedKey::Escape) => Some(Command::Exit),
        Key::Character(text) => match text.to_lowercase().as_str() {
            "w" => Some(Command::MoveUp),
            "s" => Some(Command::MoveDown),
            "a" => Some(Command::MoveLeft),
            "d" => Some(Command::MoveRight),
            "q" => Some(Command::Exit),
            "h" => Some(Command::Help),
            "1" => Some(Command::Switch(FrontendId::Terminal)),
            "2" => Some(Command::Switch(FrontendId::Canvas)),
            "3" => Some(Command::Switch(FrontendId::Gpu)),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use winit::keyboard::SmolStr;

    use super::*;

    fn chr(s: &str) -> Key {
        Key::Character(SmolStr::new(s))
    }

    #[test]
    fn arrows_steer() {
        assert_eq!(
            map(&Key::Named(NamedKey::ArrowUp)),
            Some(Command::MoveUp)
        );
        assert_eq!(
            map(&Key::Named(NamedKey::ArrowDown)),
            Some(Command::MoveDown)
        );
        assert_eq!(
            map(&Key::Named(NamedKey::ArrowLeft)),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            map(&Key::Named(NamedKey::ArrowRight)),
            Some(Command::MoveRight)
        );
    }

    #[test]
    fn wasd_steers_in_both_cases() {
        assert_eq!(map(&chr("w")), Some(Command::MoveUp));
        assert_eq!(map(&chr("A")), Some(Command::MoveLeft));
        assert_eq!(map(&chr("S")), Some(Command::MoveDown));
        assert_eq!(map(&chr("d")), Some(Command::MoveRight));
    }

    #[test]
    fn quit_keys_exit() {
        assert_eq!(map(&chr("q")), Some(Command::Exit));
        assert_eq!(map(&Key::Named(NamedKey::Escape)), Some(Command::Exit));
    }

    #[test]
    fn digits_swap_frontends() {
        assert_eq!(map(&chr("1")), Some(Command::Switch(FrontendId::Terminal)));
        assert_eq!(map(&chr("2")), Some(Command::Switch(FrontendId::Canvas)));
        assert_eq!(map(&chr("3")), Some(Command::Switch(FrontendId::Gpu)));
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(map(&chr("z")), None);
        assert_eq!(map(&chr("4")), None);
        assert_eq!(map(&Key::Named(NamedKey::Tab)), None);
    }
}
