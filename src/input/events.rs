//! Generic input event types for cross-backend compatibility.

/// Generic key representation for cross-backend compatibility.
///
/// Backend implementations map their native key codes to these generic
/// key values. Letters are always lowercase; Shift shows up in the modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    Escape,
    Return,
    Backspace,
    Tab,
    Space,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    /// Function key F1-F12
    F(u8),
    Shift,
    Ctrl,
    Alt,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Name used by keybinding strings ("Escape", "F12", "s", ...).
    pub fn name(self) -> String {
        match self {
            Key::Char(c) => c.to_string(),
            Key::F(n) => format!("F{}", n),
            other => format!("{:?}", other),
        }
    }

    /// Parses a key name as written in keybinding strings, case-insensitively.
    pub fn from_name(name: &str) -> Option<Key> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Key::Char(c.to_ascii_lowercase()));
        }

        let lower = name.to_lowercase();
        if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            return (1..=12).contains(&n).then_some(Key::F(n));
        }

        let key = match lower.as_str() {
            "escape" | "esc" => Key::Escape,
            "return" | "enter" => Key::Return,
            "backspace" => Key::Backspace,
            "tab" => Key::Tab,
            "space" => Key::Space,
            "delete" => Key::Delete,
            "insert" => Key::Insert,
            "home" => Key::Home,
            "end" => Key::End,
            "pageup" => Key::PageUp,
            "pagedown" => Key::PageDown,
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            "shift" => Key::Shift,
            "ctrl" | "control" => Key::Ctrl,
            "alt" => Key::Alt,
            _ => return None,
        };
        Some(key)
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button, drives every widget
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Position in the pressed-buttons array (left 0, right 1, middle 2).
    pub fn index(self) -> usize {
        match self {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
            MouseButton::Middle => 2,
        }
    }
}

/// A key transition queued for the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for key in [Key::Escape, Key::F(12), Key::Char('s'), Key::PageDown] {
            assert_eq!(Key::from_name(&key.name()), Some(key));
        }
    }

    #[test]
    fn single_letters_are_lowercased() {
        assert_eq!(Key::from_name("Q"), Some(Key::Char('q')));
        assert_eq!(Key::from_name("F13"), None);
        assert_eq!(Key::from_name("hyper"), None);
    }
}
