//! Crossterm key to command translation.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use wurm_core::command::{Command, FrontendId};

/// Map one key event to a command. Repeats and releases are ignored; keys
/// with no binding map to `None`.
pub fn map(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Exit);
    }
    match key.code {
        KeyCode::Up => Some(Command::MoveUp),
        KeyCode::Down => Some(Command::MoveDown),
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Esc => Some(Command::Exit),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Some(Command::MoveUp),
            's' => Some(Command::MoveDown),
            'a' => Some(Command::MoveLeft),
            'd' => Some(Command::MoveRight),
            'q' => Some(Command::Exit),
            'h' => Some(Command::Help),
            '1' => Some(Command::Switch(FrontendId::Terminal)),
            '2' => Some(Command::Switch(FrontendId::Canvas)),
            '3' => Some(Command::Switch(FrontendId::Gpu)),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_steer() {
        assert_eq!(map(press(KeyCode::Up)), Some(Command::MoveUp));
        assert_eq!(map(press(KeyCode::Down)), Some(Command::MoveDown));
        assert_eq!(map(press(KeyCode::Left)), Some(Command::MoveLeft));
        assert_eq!(map(press(KeyCode::Right)), Some(Command::MoveRight));
    }

    #[test]
    fn wasd_steers_in_both_cases() {
        assert_eq!(map(press(KeyCode::Char('w'))), Some(Command::MoveUp));
        assert_eq!(map(press(KeyCode::Char('S'))), Some(Command::MoveDown));
        assert_eq!(map(press(KeyCode::Char('a'))), Some(Command::MoveLeft));
        assert_eq!(map(press(KeyCode::Char('D'))), Some(Command::MoveRight));
    }

    #[test]
    fn quit_keys_exit() {
        assert_eq!(map(press(KeyCode::Char('q'))), Some(Command::Exit));
        assert_eq!(map(press(KeyCode::Esc)), Some(Command::Exit));
        assert_eq!(
            map(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Exit)
        );
    }

    #[test]
    fn help_and_swap_keys() {
        assert_eq!(map(press(KeyCode::Char('h'))), Some(Command::Help));
        assert_eq!(
            map(press(KeyCode::Char('1'))),
            Some(Command::Switch(FrontendId::Terminal))
        );
        assert_eq!(
            map(press(KeyCode::Char('2'))),
            Some(Command::Switch(FrontendId::Canvas))
        );
        assert_eq!(
            map(press(KeyCode::Char('3'))),
            Some(Command::Switch(FrontendId::Gpu))
        );
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(map(press(KeyCode::Char('x'))), None);
        assert_eq!(map(press(KeyCode::Char('4'))), None);
        assert_eq!(map(press(KeyCode::Tab)), None);
        assert_eq!(map(press(KeyCode::Enter)), None);
    }

    #[test]
    fn releases_are_ignored() {
        let mut key = press(KeyCode::Up);
        key.kind = KeyEventKind::Release;
        assert_eq!(map(key), None);
    }
}
