//! Pointer event helpers for the drawing surface.

use canvas::camera::Point as CanvasPoint;
use wasm_bindgen::JsCast;

/// Surface-relative pixel position of a pointer event.
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> CanvasPoint {
    CanvasPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Keep receiving move/up events for this pointer even if it leaves the canvas.
pub fn capture_pointer(ev: &leptos::ev::PointerEvent) {
    let Some(element) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return;
    };
    if let Err(err) = element.set_pointer_capture(ev.pointer_id()) {
        leptos::logging::warn!("pointer capture failed: {err:?}");
    }
}
