//! Sketch-defined key bindings.
//!
//! Each bound key points at a slot holding an action name and a firing
//! behaviour. Killing a binding empties its slot so other keys keep theirs.

use super::events::{Key, KeyEvent};
use crate::error::{Result, SketchError};
use log::debug;
use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;

/// When a bound key fires its action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyBehaviour {
    /// Once on key-down
    #[default]
    Pressed,
    /// Once on key-up
    Released,
    /// Every frame while the key is held
    Hold,
}

impl FromStr for KeyBehaviour {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pressed" => Ok(KeyBehaviour::Pressed),
            "released" => Ok(KeyBehaviour::Released),
            "hold" => Ok(KeyBehaviour::Hold),
            _ => Err(format!("{} is not a valid key behaviour", s)),
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    action: Option<String>,
    behaviour: KeyBehaviour,
}

/// Key → action table with held-key tracking.
#[derive(Debug, Default)]
pub struct KeyMap {
    bindings: HashMap<Key, usize>,
    slots: Vec<Slot>,
    held: BTreeSet<usize>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds an unbound key to a new action slot.
    pub fn bind(&mut self, key: Key, action: &str, behaviour: KeyBehaviour) -> Result<()> {
        if self.bindings.contains_key(&key) {
            return Err(SketchError::DuplicateKeyBinding(key.name()));
        }
        self.slots.push(Slot {
            action: Some(action.to_string()),
            behaviour,
        });
        self.bindings.insert(key, self.slots.len() - 1);
        debug!("bound {} to '{}' ({:?})", key.name(), action, behaviour);
        Ok(())
    }

    /// Changes the action of a bound key, and its behaviour when one is given.
    pub fn update(&mut self, key: Key, action: &str, behaviour: Option<KeyBehaviour>) -> Result<()> {
        let slot = self
            .bindings
            .get(&key)
            .copied()
            .ok_or_else(|| SketchError::UnknownKeyBinding(key.name()))?;
        let slot = &mut self.slots[slot];
        slot.action = Some(action.to_string());
        if let Some(behaviour) = behaviour {
            slot.behaviour = behaviour;
        }
        Ok(())
    }

    /// Removes a binding. Its slot is emptied, not reused.
    pub fn kill(&mut self, key: Key) -> Result<()> {
        let slot = self
            .bindings
            .remove(&key)
            .ok_or_else(|| SketchError::UnknownKeyBinding(key.name()))?;
        self.slots[slot].action = None;
        self.held.remove(&slot);
        Ok(())
    }

    /// Current key → slot index table.
    pub fn bindings(&self) -> &HashMap<Key, usize> {
        &self.bindings
    }

    pub fn is_bound(&self, key: Key) -> bool {
        self.bindings.contains_key(&key)
    }

    pub fn behaviour(&self, key: Key) -> Option<KeyBehaviour> {
        self.bindings.get(&key).map(|&slot| self.slots[slot].behaviour)
    }

    /// Processes one frame of key events and returns the actions to fire, in order.
    ///
    /// Held keys fire once per frame after the queued events, including the
    /// frame they were pressed in.
    pub fn dispatch(&mut self, events: &[KeyEvent]) -> Vec<String> {
        let mut fired = Vec::new();
        for event in events {
            let (key, down) = match *event {
                KeyEvent::Pressed(key) => (key, true),
                KeyEvent::Released(key) => (key, false),
            };
            let Some(&slot) = self.bindings.get(&key) else {
                continue;
            };
            match (self.slots[slot].behaviour, down) {
                (KeyBehaviour::Pressed, true) | (KeyBehaviour::Released, false) => {
                    fired.extend(self.slots[slot].action.clone());
                }
                (KeyBehaviour::Hold, _) => self.set_held(slot, down),
                _ => {}
            }
        }
        for &slot in &self.held {
            fired.extend(self.slots[slot].action.clone());
        }
        fired
    }

    /// Follows presses and releases of `Hold` keys without firing anything.
    pub fn track_held(&mut self, events: &[KeyEvent]) {
        for event in events {
            let (key, down) = match *event {
                KeyEvent::Pressed(key) => (key, true),
                KeyEvent::Released(key) => (key, false),
            };
            if let Some(&slot) = self.bindings.get(&key)
                && self.slots[slot].behaviour == KeyBehaviour::Hold
            {
                self.set_held(slot, down);
            }
        }
    }

    fn set_held(&mut self, slot: usize, down: bool) {
        if down {
            self.held.insert(slot);
        } else {
            self.held.remove(&slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(c: char) -> KeyEvent {
        KeyEvent::Pressed(Key::Char(c))
    }

    fn release(c: char) -> KeyEvent {
        KeyEvent::Released(Key::Char(c))
    }

    #[test]
    fn pressed_and_released_fire_once() {
        let mut keys = KeyMap::new();
        keys.bind(Key::Char('a'), "jump", KeyBehaviour::Pressed).unwrap();
        keys.bind(Key::Char('b'), "land", KeyBehaviour::Released).unwrap();

        assert_eq!(keys.dispatch(&[press('a'), press('b')]), vec!["jump"]);
        assert_eq!(keys.dispatch(&[release('a'), release('b')]), vec!["land"]);
        assert!(keys.dispatch(&[]).is_empty());
    }

    #[test]
    fn hold_fires_every_frame_until_released() {
        let mut keys = KeyMap::new();
        keys.bind(Key::Up, "grow", KeyBehaviour::Hold).unwrap();
        assert_eq!(keys.dispatch(&[KeyEvent::Pressed(Key::Up)]), vec!["grow"]);
        assert_eq!(keys.dispatch(&[]), vec!["grow"]);
        assert!(keys.dispatch(&[KeyEvent::Released(Key::Up)]).is_empty());
    }

    #[test]
    fn tracking_follows_hold_keys_silently() {
        let mut keys = KeyMap::new();
        keys.bind(Key::Up, "grow", KeyBehaviour::Hold).unwrap();
        keys.bind(Key::Char('a'), "jump", KeyBehaviour::Pressed).unwrap();
        assert_eq!(keys.dispatch(&[KeyEvent::Pressed(Key::Up)]), vec!["grow"]);

        keys.track_held(&[KeyEvent::Released(Key::Up), press('a')]);
        assert!(keys.dispatch(&[]).is_empty());

        keys.track_held(&[KeyEvent::Pressed(Key::Up)]);
        assert_eq!(keys.dispatch(&[]), vec!["grow"]);
    }

    #[test]
    fn duplicate_and_unknown_keys_are_errors() {
        let mut keys = KeyMap::new();
        keys.bind(Key::Space, "go", KeyBehaviour::Pressed).unwrap();
        assert!(matches!(
            keys.bind(Key::Space, "again", KeyBehaviour::Pressed),
            Err(SketchError::DuplicateKeyBinding(_))
        ));
        assert!(matches!(
            keys.update(Key::Tab, "x", None),
            Err(SketchError::UnknownKeyBinding(_))
        ));
        assert!(keys.kill(Key::Tab).is_err());
    }

    #[test]
    fn update_keeps_behaviour_unless_given() {
        let mut keys = KeyMap::new();
        keys.bind(Key::Char('h'), "old", KeyBehaviour::Hold).unwrap();
        keys.update(Key::Char('h'), "new", None).unwrap();
        assert_eq!(keys.behaviour(Key::Char('h')), Some(KeyBehaviour::Hold));
        keys.update(Key::Char('h'), "newer", Some(KeyBehaviour::Released)).unwrap();
        assert_eq!(keys.behaviour(Key::Char('h')), Some(KeyBehaviour::Released));
        assert_eq!(keys.dispatch(&[release('h')]), vec!["newer"]);
    }

    #[test]
    fn kill_keeps_other_slots_and_drops_held_state() {
        let mut keys = KeyMap::new();
        keys.bind(Key::Char('a'), "one", KeyBehaviour::Hold).unwrap();
        keys.bind(Key::Char('b'), "two", KeyBehaviour::Pressed).unwrap();
        keys.dispatch(&[press('a')]);

        keys.kill(Key::Char('a')).unwrap();
        assert!(keys.dispatch(&[]).is_empty());
        assert_eq!(keys.bindings().get(&Key::Char('b')), Some(&1));
        assert!(!keys.is_bound(Key::Char('a')));

        keys.bind(Key::Char('a'), "three", KeyBehaviour::Pressed).unwrap();
        assert_eq!(keys.bindings().get(&Key::Char('a')), Some(&2));
    }
}
