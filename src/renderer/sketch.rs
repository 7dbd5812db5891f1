//! The sketch interface and what widgets and keys hand back to it.

use super::Renderer;
use crate::error::Result;
use crate::events::CompletedEvent;

/// Something that fired during a frame.
///
/// Triggers are collected while widgets and keys are processed and handed to
/// [`Sketch::on_trigger`] at the end of the frame, when the renderer is free
/// to be mutated again.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    /// A visible button was clicked
    Button(String),
    /// An item of an expanded menu was clicked
    MenuItem { menu: String, item: String },
    /// A bound key fired its action
    Key(String),
    /// A registered event completed
    Event(CompletedEvent),
}

/// A program driven by the renderer's frame loop.
pub trait Sketch {
    /// Called once before the first frame.
    fn setup(&mut self, _renderer: &mut Renderer) -> Result<()> {
        Ok(())
    }

    /// Called at the start of every frame.
    fn draw(&mut self, renderer: &mut Renderer);

    /// Called at the end of the frame for each trigger, in firing order.
    fn on_trigger(&mut self, _renderer: &mut Renderer, _trigger: &Trigger) {}
}
