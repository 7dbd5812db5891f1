// Connects to the compositor, opens the sketch window and drives the frame loop,
// delegating protocol state to `WaylandState` and its handler modules.
use anyhow::{Context, Result, anyhow};
use log::{debug, info, warn};
use smithay_client_toolkit::{
    compositor::CompositorState,
    reexports::{calloop::EventLoop, calloop_wayland_source::WaylandSource},
    registry::RegistryState,
    seat::SeatState,
    shell::{
        WaylandSurface,
        xdg::{XdgShell, window::WindowDecorations},
    },
    shm::Shm,
};
use std::time::Duration;
use wayland_client::{Connection, globals::registry_queue_init};

use super::state::WaylandState;
use crate::renderer::{Renderer, Sketch};

/// Consecutive presentation failures tolerated before giving up.
const MAX_PRESENT_FAILURES: u32 = 10;

/// Opens a window of the renderer's size and runs frames until the sketch quits
/// or the window is closed. `setup` must already have run.
pub fn run(renderer: Renderer, sketch: &mut dyn Sketch) -> Result<()> {
    info!("Starting Wayland backend");

    let conn = Connection::connect_to_env().context("Failed to connect to Wayland compositor")?;
    debug!("Connected to Wayland display");

    let (globals, event_queue) =
        registry_queue_init(&conn).context("Failed to initialize Wayland registry")?;
    let qh = event_queue.handle();

    let compositor_state =
        CompositorState::bind(&globals, &qh).context("wl_compositor not available")?;
    debug!("Bound compositor");

    let xdg_shell = XdgShell::bind(&globals, &qh).context("xdg_wm_base not available")?;
    debug!("Bound xdg shell");

    let shm = Shm::bind(&globals, &qh).context("wl_shm not available")?;
    debug!("Bound shared memory");

    let seat_state = SeatState::new(&globals, &qh);
    let registry_state = RegistryState::new(&globals);

    debug!(
        "  Size: {}x{} @ {} fps",
        renderer.width(),
        renderer.height(),
        renderer.target_fps()
    );
    debug!("  Buffer count: {}", renderer.config().performance.buffer_count);
    debug!("  VSync: {}", renderer.config().performance.enable_vsync);

    let mut state = WaylandState::new(
        registry_state,
        compositor_state,
        xdg_shell,
        shm,
        seat_state,
        renderer,
    );

    info!("Creating sketch window");
    let wl_surface = state.compositor_state.create_surface(&qh);
    let window = state
        .xdg_shell
        .create_window(wl_surface, WindowDecorations::RequestServer, &qh);
    window.set_title(state.renderer.title().to_string());
    window.set_app_id("phoenyx");
    // Canvas size is fixed for the life of the sketch
    let size = Some((state.surface.width(), state.surface.height()));
    window.set_min_size(size);
    window.set_max_size(size);
    window.commit();
    state.surface.set_window(window);

    let mut event_loop: EventLoop<WaylandState> =
        EventLoop::try_new().context("Failed to create event loop")?;
    WaylandSource::new(conn.clone(), event_queue)
        .insert(event_loop.handle())
        .map_err(|e| anyhow!("Failed to insert Wayland event source: {}", e.error))?;

    let mut consecutive_failures = 0u32;
    while state.renderer.is_running() {
        // Block until configured or the frame callback arrives, otherwise
        // sleep until the next frame is due
        let timeout = if state.can_present() {
            Some(state.renderer.frame_delay().unwrap_or(Duration::ZERO))
        } else {
            None
        };
        event_loop
            .dispatch(timeout, &mut state)
            .context("Wayland event loop error")?;

        let due = state
            .renderer
            .frame_delay()
            .is_none_or(|delay| delay.is_zero());
        if !state.renderer.is_running() || !state.can_present() || !due {
            continue;
        }

        state.renderer.step(sketch);
        match state.present(&qh) {
            Ok(()) => consecutive_failures = 0,
            Err(e) => {
                consecutive_failures += 1;
                warn!(
                    "Presentation error (attempt {}/{}): {}",
                    consecutive_failures, MAX_PRESENT_FAILURES, e
                );
                if consecutive_failures >= MAX_PRESENT_FAILURES {
                    return Err(anyhow!(
                        "Too many consecutive presentation failures ({}), exiting: {}",
                        consecutive_failures,
                        e
                    ));
                }
            }
        }
    }

    info!(
        "Wayland backend exiting after {} frames",
        state.renderer.frame_count()
    );
    Ok(())
}
