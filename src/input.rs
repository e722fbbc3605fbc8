//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input actions for the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Flap, or restart once the round is over (Space, Up, Enter, k).
    Primary,
    /// Leave the game (Esc, q, Ctrl-C).
    Quit,
    /// Any other key.
    None,
}

/// Map a terminal key event to a game action. Only key presses count, so
/// terminals that report releases do not double-flap.
pub fn map_key(key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter | KeyCode::Char('k') => {
            InputAction::Primary
        }
        KeyCode::Esc | KeyCode::Char('q') => InputAction::Quit,
        _ => InputAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        key(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    #[test]
    fn test_flap_keys() {
        for code in [
            KeyCode::Char(' '),
            KeyCode::Up,
            KeyCode::Enter,
            KeyCode::Char('k'),
        ] {
            assert_eq!(map_key(press(code)), InputAction::Primary);
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Esc)), InputAction::Quit);
        assert_eq!(map_key(press(KeyCode::Char('q'))), InputAction::Quit);
        assert_eq!(
            map_key(key(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyEventKind::Press
            )),
            InputAction::Quit
        );
    }

    #[test]
    fn test_plain_c_is_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('c'))), InputAction::None);
        assert_eq!(map_key(press(KeyCode::Left)), InputAction::None);
    }

    #[test]
    fn test_release_and_repeat_ignored() {
        for kind in [KeyEventKind::Release, KeyEventKind::Repeat] {
            assert_eq!(
                map_key(key(KeyCode::Char(' '), KeyModifiers::NONE, kind)),
                InputAction::None
            );
        }
    }
}
