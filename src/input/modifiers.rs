//! Keyboard modifier state tracking.

/// Keyboard modifier state.
///
/// Tracks which modifier keys (Shift, Ctrl, Alt) are currently pressed.
/// Used when matching the built-in keybindings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the flag for a modifier key. Returns false for other keys.
    pub fn track(&mut self, key: super::Key, pressed: bool) -> bool {
        match key {
            super::Key::Shift => self.shift = pressed,
            super::Key::Ctrl => self.ctrl = pressed,
            super::Key::Alt => self.alt = pressed,
            _ => return false,
        }
        true
    }
}
