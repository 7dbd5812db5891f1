//! Named one-shot events polled once per frame.
//!
//! An event is a trigger closure checked every frame against the input
//! state. The first time it yields a value the event is done and keeps that
//! value. Terminating an event drops its name; its id is never reused.

use crate::input::InputState;
use log::{debug, warn};
use std::fmt;

/// Result carried by a finished event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<bool> for EventValue {
    fn from(v: bool) -> Self {
        EventValue::Bool(v)
    }
}

impl From<i64> for EventValue {
    fn from(v: i64) -> Self {
        EventValue::Int(v)
    }
}

impl From<f64> for EventValue {
    fn from(v: f64) -> Self {
        EventValue::Float(v)
    }
}

impl From<&str> for EventValue {
    fn from(v: &str) -> Self {
        EventValue::Text(v.to_string())
    }
}

impl From<String> for EventValue {
    fn from(v: String) -> Self {
        EventValue::Text(v)
    }
}

/// Lookup key: an event name or its id.
#[derive(Debug, Clone, PartialEq)]
pub enum EventRef<'a> {
    Name(&'a str),
    Id(u64),
}

impl<'a> From<&'a str> for EventRef<'a> {
    fn from(name: &'a str) -> Self {
        EventRef::Name(name)
    }
}

impl From<u64> for EventRef<'_> {
    fn from(id: u64) -> Self {
        EventRef::Id(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventState {
    Running,
    Done,
}

impl fmt::Display for EventState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventState::Running => write!(f, "running"),
            EventState::Done => write!(f, "done"),
        }
    }
}

/// Trigger checked each frame; `Some` completes the event.
pub type EventTrigger = Box<dyn FnMut(&InputState) -> Option<EventValue>>;

struct Entry {
    id: u64,
    name: String,
    result: Option<EventValue>,
    trigger: Option<EventTrigger>,
}

impl Entry {
    fn is_terminated(&self) -> bool {
        self.name.is_empty()
    }
}

/// An event that completed during [`EventRegistry::poll`].
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedEvent {
    pub id: u64,
    pub name: String,
    pub value: EventValue,
}

#[derive(Default)]
pub struct EventRegistry {
    entries: Vec<Entry>,
    last_id: u64,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an event and returns its id (ids start at 1).
    pub fn add<F>(&mut self, name: &str, trigger: F) -> u64
    where
        F: FnMut(&InputState) -> Option<EventValue> + 'static,
    {
        self.last_id += 1;
        self.entries.push(Entry {
            id: self.last_id,
            name: name.to_string(),
            result: None,
            trigger: Some(Box::new(trigger)),
        });
        debug!("new event '{}' with id {}", name, self.last_id);
        self.last_id
    }

    fn entry<'a>(&self, key: impl Into<EventRef<'a>>) -> Option<&Entry> {
        match key.into() {
            EventRef::Name(name) => self
                .entries
                .iter()
                .find(|e| !e.is_terminated() && e.name == name),
            EventRef::Id(id) => self.entries.iter().find(|e| e.id == id),
        }
    }

    /// Result of an event; `None` while it is running or when it is unknown.
    pub fn get<'a>(&self, key: impl Into<EventRef<'a>>) -> Option<&EventValue> {
        self.entry(key).and_then(|e| e.result.as_ref())
    }

    pub fn id_by_name(&self, name: &str) -> Option<u64> {
        self.entry(name).map(|e| e.id)
    }

    /// Name of an event; terminated events no longer have one.
    pub fn name_by_id(&self, id: u64) -> Option<&str> {
        self.entry(id)
            .filter(|e| !e.is_terminated())
            .map(|e| e.name.as_str())
    }

    /// `(name, id, state)` of every non-terminated event, by id.
    pub fn list(&self) -> Vec<(String, u64, EventState)> {
        self.entries
            .iter()
            .filter(|e| !e.is_terminated())
            .map(|e| {
                let state = if e.result.is_some() {
                    EventState::Done
                } else {
                    EventState::Running
                };
                (e.name.clone(), e.id, state)
            })
            .collect()
    }

    /// Drops an event's name and trigger. Returns false for unknown ids.
    pub fn terminate(&mut self, id: u64) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.name.clear();
                entry.trigger = None;
                true
            }
            None => {
                warn!("no event with id {}, nothing terminated", id);
                false
            }
        }
    }

    /// Checks every running event once and returns those that just finished.
    pub fn poll(&mut self, input: &InputState) -> Vec<CompletedEvent> {
        let mut completed = Vec::new();
        for entry in &mut self.entries {
            if entry.result.is_some() {
                continue;
            }
            let Some(trigger) = entry.trigger.as_mut() else {
                continue;
            };
            if let Some(value) = trigger(input) {
                debug!("event '{}' ({}) done", entry.name, entry.id);
                entry.result = Some(value.clone());
                entry.trigger = None;
                completed.push(CompletedEvent {
                    id: entry.id,
                    name: entry.name.clone(),
                    value,
                });
            }
        }
        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButton;

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut events = EventRegistry::new();
        assert_eq!(events.add("a", |_| None), 1);
        assert_eq!(events.add("b", |_| None), 2);
        assert_eq!(events.id_by_name("b"), Some(2));
        assert_eq!(events.name_by_id(1), Some("a"));
    }

    #[test]
    fn poll_completes_once() {
        let mut events = EventRegistry::new();
        let mut calls = 0;
        events.add("click", move |input: &InputState| {
            calls += 1;
            input
                .mouse_is_down(MouseButton::Left)
                .then(|| EventValue::Int(calls))
        });

        let mut input = InputState::new();
        assert!(events.poll(&input).is_empty());
        assert_eq!(events.list()[0].2, EventState::Running);

        input.on_mouse_press(MouseButton::Left, 0.0, 0.0);
        let done = events.poll(&input);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].value, EventValue::Int(2));
        assert!(events.poll(&input).is_empty());

        assert_eq!(events.get("click"), Some(&EventValue::Int(2)));
        assert_eq!(events.get(1u64), Some(&EventValue::Int(2)));
        assert_eq!(events.list(), vec![("click".to_string(), 1, EventState::Done)]);
    }

    #[test]
    fn terminate_keeps_the_id_reserved() {
        let mut events = EventRegistry::new();
        let id = events.add("gone", |_| Some(true.into()));
        assert!(events.terminate(id));
        assert!(!events.terminate(99));
        assert!(events.list().is_empty());
        assert_eq!(events.id_by_name("gone"), None);
        assert_eq!(events.name_by_id(id), None);
        assert!(events.poll(&InputState::new()).is_empty());
        assert_eq!(events.add("next", |_| None), 2);
    }
}
