// Holds the live Wayland protocol state shared by the backend loop and the handler
// submodules, plus the renderer the handlers feed input into.
use anyhow::{Context, Result};
use log::debug;
use smithay_client_toolkit::{
    compositor::CompositorState, registry::RegistryState, seat::SeatState,
    shell::{WaylandSurface, xdg::XdgShell}, shm::Shm,
};
use wayland_client::{
    QueueHandle,
    protocol::{wl_keyboard, wl_pointer, wl_shm},
};

use crate::renderer::Renderer;

use super::surface::SurfaceState;

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) xdg_shell: XdgShell,
    pub(super) shm: Shm,
    pub(super) seat_state: SeatState,
    pub(super) keyboard: Option<wl_keyboard::WlKeyboard>,
    pub(super) pointer: Option<wl_pointer::WlPointer>,

    // Window and buffer management
    pub(super) surface: SurfaceState,

    // Sketch state fed by the pointer and keyboard handlers
    pub(super) renderer: Renderer,
}

impl WaylandState {
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        xdg_shell: XdgShell,
        shm: Shm,
        seat_state: SeatState,
        renderer: Renderer,
    ) -> Self {
        let surface = SurfaceState::new(renderer.width() as u32, renderer.height() as u32);
        Self {
            registry_state,
            compositor_state,
            xdg_shell,
            shm,
            seat_state,
            keyboard: None,
            pointer: None,
            surface,
            renderer,
        }
    }

    fn vsync(&self) -> bool {
        self.renderer.config().performance.enable_vsync
    }

    /// Copies the canvas into a fresh shm buffer and commits it.
    pub(super) fn present(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        let buffer_count = self.renderer.config().performance.buffer_count as usize;
        let width = self.surface.width();
        let height = self.surface.height();
        let stride = (width * 4) as i32;

        let (buffer, pixels) = {
            let pool = self.surface.ensure_pool(&self.shm, buffer_count)?;
            pool.create_buffer(
                width as i32,
                height as i32,
                stride,
                wl_shm::Format::Argb8888,
            )
            .context("Failed to create buffer")?
        };

        // SAFETY: `pixels` is the SlotPool slice backing `buffer`, exactly
        // stride * height bytes in the ARGB32 layout cairo expects. The cairo
        // surface and context are dropped before the buffer is attached, so
        // cairo never touches the memory once the compositor owns it.
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                pixels.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                stride,
            )
            .context("Failed to create Cairo surface")?
        };
        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;
        self.renderer.canvas().paint_onto(&ctx)?;
        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        let window = self.surface.window().context("Window not created")?;
        if let Some(title) = self.renderer.take_title_update() {
            window.set_title(title);
        }

        let wl_surface = window.wl_surface().clone();
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);
        wl_surface.damage_buffer(0, 0, width as i32, height as i32);
        if self.vsync() {
            wl_surface.frame(qh, wl_surface.clone());
            self.surface.set_frame_callback_pending(true);
        }
        wl_surface.commit();
        debug!("Presented frame {}", self.renderer.frame_count());

        Ok(())
    }

    /// Whether the loop may present now: configured, and no frame callback outstanding under vsync.
    pub(super) fn can_present(&self) -> bool {
        self.surface.is_configured() && !(self.vsync() && self.surface.frame_callback_pending())
    }
}
