//! Tracks the sketch window and the shared memory buffers it is presented from.

use anyhow::{Context, Result};
use log::info;
use smithay_client_toolkit::{
    shell::xdg::window::Window,
    shm::{Shm, slot::SlotPool},
};

/// The toplevel window, its buffer pool and the frame pacing flags.
pub struct SurfaceState {
    window: Option<Window>,
    pool: Option<SlotPool>,
    width: u32,
    height: u32,
    configured: bool,
    frame_callback_pending: bool,
}

impl SurfaceState {
    /// Unconfigured state for a window of the sketch size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            window: None,
            pool: None,
            width,
            height,
            configured: false,
            frame_callback_pending: false,
        }
    }

    pub fn set_window(&mut self, window: Window) {
        self.window = Some(window);
    }

    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_configured(&mut self, configured: bool) {
        self.configured = configured;
    }

    /// Whether the compositor acknowledged the window with a first configure.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn set_frame_callback_pending(&mut self, pending: bool) {
        self.frame_callback_pending = pending;
    }

    pub fn frame_callback_pending(&self) -> bool {
        self.frame_callback_pending
    }

    /// Ensures a pool holding `buffer_count` frames of the window size exists.
    pub fn ensure_pool(&mut self, shm: &Shm, buffer_count: usize) -> Result<&mut SlotPool> {
        if self.pool.is_none() {
            let pool_size = (self.width * self.height * 4) as usize * buffer_count;
            info!(
                "Creating SlotPool ({}x{}, {} bytes, {} buffers)",
                self.width, self.height, pool_size, buffer_count
            );
            let pool = SlotPool::new(pool_size, shm).context("Failed to create slot pool")?;
            self.pool = Some(pool);
        }

        self.pool
            .as_mut()
            .context("Buffer pool not initialized despite previous check")
    }
}
