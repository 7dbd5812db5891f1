//! Per-frame input snapshot fed by the backend.

use super::events::{Key, KeyEvent, MouseButton};
use super::modifiers::Modifiers;
use log::trace;

/// Mouse, keyboard and window state as the sketch sees it.
///
/// Backends update it as events arrive; the renderer drains the queued key
/// events and wheel motion once per frame.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    mouse: (f64, f64),
    buttons: [bool; 3],
    /// Current modifier key state
    pub modifiers: Modifiers,
    key_events: Vec<KeyEvent>,
    keys_down: Vec<Key>,
    wheel: f64,
    close_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_mouse_motion(&mut self, x: f64, y: f64) {
        self.mouse = (x, y);
    }

    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64) {
        self.mouse = (x, y);
        self.buttons[button.index()] = true;
    }

    pub fn on_mouse_release(&mut self, button: MouseButton, x: f64, y: f64) {
        self.mouse = (x, y);
        self.buttons[button.index()] = false;
    }

    /// Accumulates vertical wheel motion; positive scrolls down.
    pub fn on_scroll(&mut self, delta: f64) {
        self.wheel += delta;
    }

    /// Queues a key press. Modifier keys only update [`Modifiers`].
    pub fn on_key_press(&mut self, key: Key) {
        if self.modifiers.track(key, true) {
            return;
        }
        trace!("queued press {:?}", key);
        if !self.keys_down.contains(&key) {
            self.keys_down.push(key);
        }
        self.key_events.push(KeyEvent::Pressed(key));
    }

    pub fn on_key_release(&mut self, key: Key) {
        if self.modifiers.track(key, false) {
            return;
        }
        self.keys_down.retain(|&down| down != key);
        self.key_events.push(KeyEvent::Released(key));
    }

    /// Keyboard focus left the window: no release will arrive for keys still
    /// down, so their releases are queued now and the modifiers cleared.
    pub fn on_keyboard_leave(&mut self) {
        self.modifiers = Modifiers::default();
        for key in std::mem::take(&mut self.keys_down) {
            trace!("released {:?} on focus loss", key);
            self.key_events.push(KeyEvent::Released(key));
        }
    }

    /// The window was closed by the user or the compositor.
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Pointer leaving the window releases every button.
    pub fn on_pointer_leave(&mut self) {
        self.buttons = [false; 3];
    }

    pub fn mouse_pos(&self) -> (f64, f64) {
        self.mouse
    }

    pub fn mouse_x(&self) -> f64 {
        self.mouse.0
    }

    pub fn mouse_y(&self) -> f64 {
        self.mouse.1
    }

    pub fn mouse_is_down(&self, button: MouseButton) -> bool {
        self.buttons[button.index()]
    }

    /// Key events since the last call, oldest first.
    pub fn take_key_events(&mut self) -> Vec<KeyEvent> {
        std::mem::take(&mut self.key_events)
    }

    /// Wheel motion since the last call.
    pub fn take_wheel(&mut self) -> f64 {
        std::mem::take(&mut self.wheel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_are_not_queued() {
        let mut input = InputState::new();
        input.on_key_press(Key::Ctrl);
        input.on_key_press(Key::Char('s'));
        input.on_key_release(Key::Ctrl);
        assert_eq!(input.take_key_events(), vec![KeyEvent::Pressed(Key::Char('s'))]);
        assert!(!input.modifiers.ctrl);
        assert!(input.take_key_events().is_empty());
    }

    #[test]
    fn buttons_follow_press_and_release() {
        let mut input = InputState::new();
        input.on_mouse_press(MouseButton::Left, 10.0, 20.0);
        assert!(input.mouse_is_down(MouseButton::Left));
        assert!(!input.mouse_is_down(MouseButton::Right));
        assert_eq!(input.mouse_pos(), (10.0, 20.0));
        input.on_mouse_release(MouseButton::Left, 12.0, 20.0);
        assert!(!input.mouse_is_down(MouseButton::Left));
        assert_eq!(input.mouse_x(), 12.0);
    }

    #[test]
    fn focus_loss_releases_keys_still_down() {
        let mut input = InputState::new();
        input.on_key_press(Key::Ctrl);
        input.on_key_press(Key::Up);
        input.on_key_press(Key::Char('a'));
        input.on_key_release(Key::Char('a'));
        input.take_key_events();

        input.on_keyboard_leave();
        assert_eq!(input.take_key_events(), vec![KeyEvent::Released(Key::Up)]);
        assert_eq!(input.modifiers, Modifiers::default());

        input.on_keyboard_leave();
        assert!(input.take_key_events().is_empty());
    }

    #[test]
    fn wheel_accumulates_until_taken() {
        let mut input = InputState::new();
        input.on_scroll(1.0);
        input.on_scroll(2.5);
        assert_eq!(input.take_wheel(), 3.5);
        assert_eq!(input.take_wheel(), 0.0);
    }
}
