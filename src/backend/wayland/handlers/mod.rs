// Aggregates smithay handler implementations split across focused submodules and
// wires them to `WaylandState` via the delegate macros.
use smithay_client_toolkit::{
    delegate_compositor, delegate_keyboard, delegate_pointer, delegate_registry, delegate_seat,
    delegate_shm, delegate_xdg_shell, delegate_xdg_window,
};

use super::state::WaylandState;

delegate_compositor!(WaylandState);
delegate_shm!(WaylandState);
delegate_xdg_shell!(WaylandState);
delegate_xdg_window!(WaylandState);
delegate_seat!(WaylandState);
delegate_keyboard!(WaylandState);
delegate_pointer!(WaylandState);
delegate_registry!(WaylandState);

mod buffer;
mod compositor;
mod keyboard;
mod pointer;
mod registry;
mod seat;
mod shm;
mod window;
