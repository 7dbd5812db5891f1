//! Off-screen frame loop.
//!
//! Input stays idle unless the caller feeds the renderer before running, and
//! frames are produced back to back without pacing.

use crate::renderer::{Renderer, Sketch};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;

/// Steps up to `frames` frames (fewer if the sketch quits) and optionally
/// writes the final canvas to `output` as PNG.
pub fn run(
    mut renderer: Renderer,
    sketch: &mut dyn Sketch,
    frames: u64,
    output: Option<&Path>,
) -> Result<Renderer> {
    info!("Running {} headless frames", frames);
    for _ in 0..frames {
        if !renderer.is_running() {
            debug!("Sketch quit after {} frames", renderer.frame_count());
            break;
        }
        renderer.step(sketch);
    }

    if let Some(path) = output {
        renderer
            .save_frame(Some(path))
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(renderer)
}
