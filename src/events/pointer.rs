use super::Listener;
use nodefield_core::InputTracker;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mouse and touch listeners on the document. The canvas itself never sees
/// pointer events, so positions are taken in client coordinates.
pub fn wire_pointer(
    document: &web::Document,
    input: &Rc<InputTracker>,
) -> anyhow::Result<Vec<Listener>> {
    let target: &web::EventTarget = document.as_ref();
    let mut listeners = Vec::with_capacity(4);

    let tracker = input.clone();
    listeners.push(Listener::attach(target, "mousemove", false, move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            tracker.pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
        }
    })?);

    let tracker = input.clone();
    listeners.push(Listener::attach(target, "touchmove", true, move |ev| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        if let Some(touch) = ev.touches().get(0) {
            tracker.pointer_moved(touch.client_x() as f32, touch.client_y() as f32);
        }
    })?);

    for kind in ["touchend", "touchcancel"] {
        let tracker = input.clone();
        listeners.push(Listener::attach(target, kind, false, move |_| {
            tracker.pointer_released();
        })?);
    }

    Ok(listeners)
}
