//! phoenyx: a small sketching library on cairo and pango with a Wayland window.
//!
//! A [`Sketch`] draws through a [`Renderer`] every frame. The renderer keeps
//! the drawing state and transforms, owns the widgets (buttons, sliders,
//! side menus and a scrollbar) and key bindings, and reports what fired
//! back to the sketch as [`Trigger`]s. The [`backend`] module drives the
//! frame loop, either in a Wayland window or headless.

pub mod backend;
pub mod capture;
pub mod config;
pub mod demos;
pub mod draw;
pub mod error;
pub mod events;
pub mod input;
pub mod renderer;
pub mod util;
pub mod widgets;

pub use config::Config;
pub use draw::{Behaviour, Color, ColorSpec, RectMode};
pub use error::{Result, SketchError};
pub use events::{CompletedEvent, EventValue};
pub use input::{Key, KeyBehaviour, MouseButton};
pub use renderer::{Renderer, Sketch, Trigger};
pub use widgets::{ButtonOptions, MenuOptions, Side, SliderOptions};
