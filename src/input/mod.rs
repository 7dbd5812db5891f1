//! Input handling.
//!
//! Backends translate their native pointer and keyboard events into an
//! [`InputState`]; the renderer reads it once per frame and feeds queued key
//! events through the sketch's [`KeyMap`].

pub mod events;
pub mod keymap;
pub mod modifiers;
pub mod state;

pub use events::{Key, KeyEvent, MouseButton};
pub use keymap::{KeyBehaviour, KeyMap};
pub use modifiers::Modifiers;
pub use state::InputState;
