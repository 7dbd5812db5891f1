//! Keybinding configuration types and parsing.
//!
//! Only the runner's built-in shortcuts live here; sketches bind their own
//! keys at runtime through the renderer's key map.

use crate::error::SketchError;
use crate::input::{Key, Modifiers};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Built-in actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Stop the sketch
    Quit,
    /// Write the current frame to a PNG file
    SaveFrame,
    /// Switch bench mode on or off
    ToggleBenchMode,
}

/// A single keybinding: a key character with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+W", "F12" or "Escape".
    ///
    /// Modifiers may appear in any order and spaces around '+' are allowed.
    /// A trailing "++" binds the '+' key itself.
    pub fn parse(s: &str) -> Result<Self, SketchError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SketchError::InvalidKeyBinding(
                "empty keybinding string".to_string(),
            ));
        }

        let normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut binding = Self {
            key: String::new(),
            ctrl: false,
            shift: false,
            alt: false,
        };
        let mut key_parts = Vec::new();
        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => binding.ctrl = true,
                "shift" => binding.shift = true,
                "alt" => binding.alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(SketchError::InvalidKeyBinding(format!(
                "no key specified in: {}",
                s
            )));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]; the empty parts rejoin as "+"
        binding.key = match key_parts.join("+") {
            key if key.is_empty() => "+".to_string(),
            key => key,
        };
        Ok(binding)
    }

    /// Check if this keybinding matches the current input state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }

    /// Check if this keybinding matches a key event under the given modifiers.
    pub fn matches_key(&self, key: Key, modifiers: &Modifiers) -> bool {
        self.matches(&key.name(), modifiers.ctrl, modifiers.shift, modifiers.alt)
    }
}

/// Configuration for the built-in keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// quit = ["Escape", "Ctrl+Q"]
/// save_frame = ["Ctrl+S"]
/// toggle_bench_mode = ["F12"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_quit")]
    pub quit: Vec<String>,

    #[serde(default = "default_save_frame")]
    pub save_frame: Vec<String>,

    #[serde(default = "default_toggle_bench_mode")]
    pub toggle_bench_mode: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            quit: default_quit(),
            save_frame: default_save_frame(),
            toggle_bench_mode: default_toggle_bench_mode(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions for efficient matching.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, SketchError> {
        let mut map = HashMap::new();

        let mut insert_binding = |binding_str: &str, action: Action| -> Result<(), SketchError> {
            let binding = KeyBinding::parse(binding_str)?;
            if let Some(existing_action) = map.insert(binding, action) {
                return Err(SketchError::Config(format!(
                    "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                    binding_str, existing_action, action
                )));
            }
            Ok(())
        };

        for binding_str in &self.quit {
            insert_binding(binding_str, Action::Quit)?;
        }

        for binding_str in &self.save_frame {
            insert_binding(binding_str, Action::SaveFrame)?;
        }

        for binding_str in &self.toggle_bench_mode {
            insert_binding(binding_str, Action::ToggleBenchMode)?;
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_quit() -> Vec<String> {
    vec!["Escape".to_string()]
}

fn default_save_frame() -> Vec<String> {
    vec!["Ctrl+S".to_string()]
}

fn default_toggle_bench_mode() -> Vec<String> {
    vec!["F12".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modifiers_in_any_order() {
        let a = KeyBinding::parse("Alt+Shift+Ctrl+q").unwrap();
        let b = KeyBinding::parse("ctrl+alt+shift+Q").unwrap();
        assert!(a.ctrl && a.shift && a.alt);
        assert!(a.matches("Q", true, true, true));
        assert!(b.matches("q", true, true, true));
    }

    #[test]
    fn test_parse_simple_key() {
        let binding = KeyBinding::parse("Escape").unwrap();
        assert_eq!(binding.key, "Escape");
        assert!(!binding.ctrl);
        assert!(!binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn test_parse_with_spaces() {
        let binding = KeyBinding::parse("Ctrl + Shift + W").unwrap();
        assert_eq!(binding.key, "W");
        assert!(binding.ctrl);
        assert!(binding.shift);
    }

    #[test]
    fn test_matches() {
        let binding = KeyBinding::parse("Ctrl+Shift+W").unwrap();
        assert!(binding.matches("W", true, true, false));
        assert!(binding.matches("w", true, true, false)); // Case insensitive
        assert!(!binding.matches("W", false, true, false)); // Missing ctrl
        assert!(!binding.matches("W", true, false, false)); // Missing shift
        assert!(!binding.matches("A", true, true, false)); // Wrong key
    }

    #[test]
    fn test_parse_empty_is_an_error() {
        assert!(matches!(
            KeyBinding::parse("  "),
            Err(SketchError::InvalidKeyBinding(_))
        ));
        assert!(KeyBinding::parse("Ctrl+Shift").is_err());
    }

    #[test]
    fn test_parse_plus_key() {
        let binding = KeyBinding::parse("Ctrl++").unwrap();
        assert_eq!(binding.key, "+");
        assert!(binding.ctrl);
    }

    #[test]
    fn test_matches_key_event() {
        let binding = KeyBinding::parse("Ctrl+S").unwrap();
        let mut modifiers = Modifiers::new();
        assert!(!binding.matches_key(Key::Char('s'), &modifiers));
        modifiers.ctrl = true;
        assert!(binding.matches_key(Key::Char('s'), &modifiers));
        assert!(KeyBinding::parse("F12").unwrap().matches_key(Key::F(12), &Modifiers::new()));
    }

    #[test]
    fn test_build_action_map() {
        let config = KeybindingsConfig::default();
        let map = config.build_action_map().unwrap();

        let escape = KeyBinding::parse("Escape").unwrap();
        assert_eq!(map.get(&escape), Some(&Action::Quit));

        let ctrl_s = KeyBinding::parse("Ctrl+S").unwrap();
        assert_eq!(map.get(&ctrl_s), Some(&Action::SaveFrame));
    }

    #[test]
    fn test_duplicate_keybinding_detection() {
        let config = KeybindingsConfig {
            quit: vec!["Ctrl+Shift+W".to_string()],
            save_frame: vec!["Shift+Ctrl+W".to_string()],
            ..Default::default()
        };

        let err = config.build_action_map().unwrap_err().to_string();
        assert!(err.contains("Duplicate keybinding"));
        assert!(err.contains("Shift+Ctrl+W"));
    }
}
