//! Frame loop drivers.
//!
//! Both backends run the sketch's `setup` once, then call
//! [`Renderer::step`] until the sketch quits.

pub mod headless;
pub mod wayland;

use crate::renderer::{Renderer, Sketch};
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Where frames end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendChoice {
    /// A Wayland window
    Wayland,
    /// Off-screen for a fixed number of frames, optionally saving the last one
    Headless {
        frames: u64,
        output: Option<PathBuf>,
    },
}

/// Runs `setup`, then the frame loop on the chosen backend.
///
/// Returns the renderer after the loop for headless inspection; the Wayland
/// backend consumes it and returns `None`.
pub fn run(
    mut renderer: Renderer,
    sketch: &mut dyn Sketch,
    choice: BackendChoice,
) -> Result<Option<Renderer>> {
    sketch
        .setup(&mut renderer)
        .context("Sketch setup failed")?;
    info!("Sketch set up ({}x{})", renderer.width(), renderer.height());

    match choice {
        BackendChoice::Wayland => {
            wayland::run(renderer, sketch)?;
            Ok(None)
        }
        BackendChoice::Headless { frames, output } => {
            let renderer = headless::run(renderer, sketch, frames, output.as_deref())?;
            Ok(Some(renderer))
        }
    }
}

impl Renderer {
    /// Runs `sketch` in a Wayland window until it quits or the window closes.
    pub fn run(self, sketch: &mut dyn Sketch) -> Result<()> {
        run(self, sketch, BackendChoice::Wayland).map(|_| ())
    }
}
