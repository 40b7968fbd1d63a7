use super::Listener;
use crate::canvas::CanvasSurface;
use crate::dom;
use nodefield_core::{FrameDriver, InputTracker};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_scroll(window: &web::Window, input: &Rc<InputTracker>) -> anyhow::Result<Listener> {
    let tracker = input.clone();
    let win = window.clone();
    Listener::attach(window.as_ref(), "scroll", true, move |_| {
        tracker.scrolled(dom::scroll_offset(&win));
    })
}

/// Repopulate the field on resize. If a frame currently holds the driver the
/// new size is parked in the tracker and applied at the top of the next tick.
pub fn wire_resize(
    window: &web::Window,
    driver: &Rc<RefCell<FrameDriver<CanvasSurface>>>,
    input: &Rc<InputTracker>,
) -> anyhow::Result<Listener> {
    let driver = driver.clone();
    let tracker = input.clone();
    let win = window.clone();
    Listener::attach(window.as_ref(), "resize", false, move |_| {
        FrameDriver::resize_or_defer(&*driver, &tracker, dom::viewport_size(&win));
    })
}
