//! Name-keyed widget collections.
//!
//! Widgets are few, so lookups are linear scans. Names need not be unique:
//! lookups warn on ambiguity and settle on the most recently added match.

use log::warn;

/// Anything a [`Registry`] can look up by name.
pub trait Named {
    /// Lowercase widget kind used in log messages ("button", "slider", ...).
    const KIND: &'static str;

    fn name(&self) -> &str;
}

#[derive(Debug)]
pub struct Registry<W> {
    items: Vec<W>,
}

impl<W> Default for Registry<W> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<W: Named> Registry<W> {
    /// Adds a widget and returns it for further tweaking.
    pub fn add(&mut self, widget: W) -> &mut W {
        self.items.push(widget);
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    fn find(&self, name: &str) -> Option<usize> {
        let mut matches = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, w)| w.name() == name)
            .map(|(i, _)| i);
        let first = matches.next();
        let last = matches.last();
        match (first, last) {
            (None, _) => {
                warn!("no {} named '{}' was found", W::KIND, name);
                None
            }
            (Some(only), None) => Some(only),
            (Some(_), Some(last)) => {
                warn!(
                    "too many {} matches for '{}', considering last found",
                    W::KIND,
                    name
                );
                Some(last)
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&W> {
        self.find(name).map(|i| &self.items[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut W> {
        self.find(name).map(|i| &mut self.items[i])
    }

    /// Removes the widget and drops it. Returns whether one was found.
    pub fn kill(&mut self, name: &str) -> bool {
        self.pop(name).is_some()
    }

    /// Removes the widget and hands it back.
    pub fn pop(&mut self, name: &str) -> Option<W> {
        self.find(name).map(|i| self.items.remove(i))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, W> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, W> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
