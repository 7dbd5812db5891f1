//! Interactive widgets polled once per frame.
//!
//! Widgets draw straight onto the canvas after the sketch's `draw`, in
//! window coordinates, and never see sketch transforms.

pub mod animation;
pub mod button;
pub mod menu;
pub mod registry;
pub mod scrollbar;
pub mod slider;

pub use animation::{Animation, ClickGate};
pub use button::{Button, ButtonOptions, ButtonShape};
pub use menu::{Menu, MenuBackground, MenuOptions, Side};
pub use registry::{Named, Registry};
pub use scrollbar::ScrollBar;
pub use slider::{CursorShape, Slider, SliderOptions};

use crate::draw::{Canvas, Color, FontDescriptor};
use log::warn;

/// What widgets need to know about the window they draw into.
pub struct DrawEnv<'a> {
    pub canvas: &'a Canvas,
    pub font: &'a FontDescriptor,
    pub background: Color,
    pub width: f64,
    pub height: f64,
}

/// Shared hide / reveal bookkeeping.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Visibility {
    hidden: bool,
}

impl Visibility {
    pub(crate) fn hide(&mut self, kind: &str, name: &str) {
        if self.hidden {
            warn!("{} '{}' is already hidden, nothing changed", kind, name);
            return;
        }
        self.hidden = true;
    }

    pub(crate) fn reveal(&mut self, kind: &str, name: &str) {
        if !self.hidden {
            warn!("{} '{}' is not hidden, nothing changed", kind, name);
            return;
        }
        self.hidden = false;
    }

    pub(crate) fn is_hidden(&self) -> bool {
        self.hidden
    }
}
