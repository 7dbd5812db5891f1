// Responds to xdg toplevel configure and close events.
use log::info;
use smithay_client_toolkit::shell::xdg::window::{Window, WindowConfigure, WindowHandler};
use wayland_client::{Connection, QueueHandle};

use super::super::state::WaylandState;

impl WindowHandler for WaylandState {
    fn request_close(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _window: &Window) {
        info!("Window closed by compositor");
        self.renderer.input_mut().request_close();
        self.renderer.quit();
    }

    fn configure(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _window: &Window,
        configure: WindowConfigure,
        _serial: u32,
    ) {
        if !self.surface.is_configured() {
            info!(
                "Window configured (suggested {:?}x{:?}, drawing {}x{})",
                configure.new_size.0,
                configure.new_size.1,
                self.surface.width(),
                self.surface.height()
            );
        }
        self.surface.set_configured(true);
    }
}
