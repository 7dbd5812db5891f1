//! Wayland backend: an xdg toplevel window presenting the renderer's canvas.

mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::run;
