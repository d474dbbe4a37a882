//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Where keystrokes currently go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Shortcuts act on the name list or the group list.
    Browse,
    /// Typing names to add.
    AddNames,
    /// Typing the name of a new group.
    NewGroup,
    /// Typing a new name for the active group.
    RenameGroup,
}

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Cancel,
    Spin,
    StartAdd,
    Clear,
    DeleteName,
    ToggleFocus,
    SelectUp,
    SelectDown,
    Activate,
    NewGroup,
    RenameGroup,
    DeleteGroup,
    /// Text entry: insert a character.
    Insert(char),
    /// Text entry: delete the character before the cursor.
    Backspace,
    /// Text entry: confirm.
    Submit,
    /// Text entry: abandon.
    Abort,
    None,
}

/// Map a key event to an action for the given input mode.
#[must_use]
pub fn map_key(key: KeyEvent, mode: InputMode) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Cancel;
    }
    if mode != InputMode::Browse {
        return match key.code {
            KeyCode::Enter => KeyAction::Submit,
            KeyCode::Esc => KeyAction::Abort,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Char(c) => KeyAction::Insert(c),
            _ => KeyAction::None,
        };
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char(' ') => KeyAction::Spin,
        KeyCode::Char('a' | 'i') => KeyAction::StartAdd,
        KeyCode::Char('c') => KeyAction::Clear,
        KeyCode::Char('d') | KeyCode::Delete => KeyAction::DeleteName,
        KeyCode::Tab => KeyAction::ToggleFocus,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::SelectUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::SelectDown,
        KeyCode::Enter => KeyAction::Activate,
        KeyCode::Char('n') => KeyAction::NewGroup,
        KeyCode::Char('r') => KeyAction::RenameGroup,
        KeyCode::Char('x') => KeyAction::DeleteGroup,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q')), InputMode::Browse), KeyAction::Quit);
        assert_eq!(map_key(key(KeyCode::Esc), InputMode::Browse), KeyAction::Quit);
    }

    #[test]
    fn ctrl_c_cancels_in_every_mode() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event, InputMode::Browse), KeyAction::Cancel);
        assert_eq!(map_key(event, InputMode::AddNames), KeyAction::Cancel);
    }

    #[test]
    fn browse_shortcuts() {
        assert_eq!(map_key(key(KeyCode::Char(' ')), InputMode::Browse), KeyAction::Spin);
        assert_eq!(map_key(key(KeyCode::Char('a')), InputMode::Browse), KeyAction::StartAdd);
        assert_eq!(map_key(key(KeyCode::Char('c')), InputMode::Browse), KeyAction::Clear);
        assert_eq!(map_key(key(KeyCode::Char('d')), InputMode::Browse), KeyAction::DeleteName);
        assert_eq!(map_key(key(KeyCode::Tab), InputMode::Browse), KeyAction::ToggleFocus);
        assert_eq!(map_key(key(KeyCode::Enter), InputMode::Browse), KeyAction::Activate);
        assert_eq!(map_key(key(KeyCode::Char('n')), InputMode::Browse), KeyAction::NewGroup);
        assert_eq!(map_key(key(KeyCode::Char('r')), InputMode::Browse), KeyAction::RenameGroup);
        assert_eq!(map_key(key(KeyCode::Char('x')), InputMode::Browse), KeyAction::DeleteGroup);
    }

    #[test]
    fn selection_keys() {
        assert_eq!(map_key(key(KeyCode::Up), InputMode::Browse), KeyAction::SelectUp);
        assert_eq!(map_key(key(KeyCode::Char('j')), InputMode::Browse), KeyAction::SelectDown);
    }

    #[test]
    fn text_entry_captures_letters() {
        assert_eq!(map_key(key(KeyCode::Char('q')), InputMode::AddNames), KeyAction::Insert('q'));
        assert_eq!(map_key(key(KeyCode::Char(' ')), InputMode::NewGroup), KeyAction::Insert(' '));
        assert_eq!(map_key(key(KeyCode::Enter), InputMode::AddNames), KeyAction::Submit);
        assert_eq!(map_key(key(KeyCode::Esc), InputMode::RenameGroup), KeyAction::Abort);
        assert_eq!(map_key(key(KeyCode::Backspace), InputMode::AddNames), KeyAction::Backspace);
    }

    #[test]
    fn unknown_key() {
        assert_eq!(map_key(key(KeyCode::Char('z')), InputMode::Browse), KeyAction::None);
        assert_eq!(map_key(key(KeyCode::F(5)), InputMode::AddNames), KeyAction::None);
    }
}
