// Feeds pointer motion, buttons and wheel into the renderer's `InputState`.
use log::{debug, trace};
use smithay_client_toolkit::seat::pointer::{
    BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, PointerEvent, PointerEventKind, PointerHandler,
};
use wayland_client::{Connection, QueueHandle, protocol::wl_pointer};

use crate::input::MouseButton;

use super::super::state::WaylandState;

fn mouse_button(code: u32) -> Option<MouseButton> {
    match code {
        BTN_LEFT => Some(MouseButton::Left),
        BTN_MIDDLE => Some(MouseButton::Middle),
        BTN_RIGHT => Some(MouseButton::Right),
        _ => None,
    }
}

impl PointerHandler for WaylandState {
    fn pointer_frame(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _pointer: &wl_pointer::WlPointer,
        events: &[PointerEvent],
    ) {
        let input = self.renderer.input_mut();
        for event in events {
            let (x, y) = event.position;
            match event.kind {
                PointerEventKind::Enter { .. } => {
                    debug!("Pointer entered at ({}, {})", x, y);
                    input.on_mouse_motion(x, y);
                }
                PointerEventKind::Leave { .. } => {
                    debug!("Pointer left surface");
                    input.on_pointer_leave();
                }
                PointerEventKind::Motion { .. } => input.on_mouse_motion(x, y),
                PointerEventKind::Press { button, .. } => {
                    trace!("Button {} pressed at ({}, {})", button, x, y);
                    if let Some(button) = mouse_button(button) {
                        input.on_mouse_press(button, x, y);
                    }
                }
                PointerEventKind::Release { button, .. } => {
                    trace!("Button {} released", button);
                    if let Some(button) = mouse_button(button) {
                        input.on_mouse_release(button, x, y);
                    }
                }
                PointerEventKind::Axis { vertical, .. } => {
                    // One notch per discrete step; smooth scrolling counts every 10 units as one
                    let steps = if vertical.discrete != 0 {
                        vertical.discrete as f64
                    } else {
                        vertical.absolute / 10.0
                    };
                    input.on_scroll(steps);
                }
            }
        }
    }
}
