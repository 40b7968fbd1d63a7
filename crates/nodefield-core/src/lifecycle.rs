//! Frame scheduling state that does not depend on the browser.
//!
//! The host calls [`FrameDriver::tick`] once per display refresh and only
//! schedules another callback when it returns `Continue`. Once the shared
//! [`Liveness`] token is killed every later tick is a no-op, which covers a
//! callback that was already queued when the view was torn down.

use crate::field::NodeField;
use crate::input::InputTracker;
use crate::node::Viewport;
use crate::render::Surface;
use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::Rc;

/// Shared "still mounted" flag.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    /// A token that was never alive, for mounts that failed before starting.
    pub fn dead() -> Self {
        Self(Rc::new(Cell::new(false)))
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn kill(&self) {
        self.0.set(false);
    }
}

pub struct FrameDriver<S: Surface> {
    field: NodeField,
    surface: S,
    input: Rc<InputTracker>,
    liveness: Liveness,
}

impl<S: Surface> FrameDriver<S> {
    pub fn new(field: NodeField, surface: S, input: Rc<InputTracker>, liveness: Liveness) -> Self {
        Self {
            field,
            surface,
            input,
            liveness,
        }
    }

    /// Run one frame. Returns `Break` once the view is gone; the caller must
    /// not schedule another frame in that case.
    pub fn tick(&mut self) -> ControlFlow<()> {
        if !self.liveness.is_alive() {
            return ControlFlow::Break(());
        }
        if let Some(viewport) = self.input.take_pending_viewport() {
            self.resize(viewport);
        }
        let snapshot = self.input.snapshot();
        self.field.advance(&snapshot, &mut self.surface);
        ControlFlow::Continue(())
    }

    /// Resize the drawing surface and repopulate the field.
    pub fn resize(&mut self, viewport: Viewport) {
        if !self.liveness.is_alive() {
            return;
        }
        self.surface.resize(viewport);
        self.field.resize(viewport);
    }

    /// Resize now if nobody holds the driver, otherwise park the size in
    /// `input` for the next [`tick`](Self::tick). Returns `true` if applied.
    pub fn resize_or_defer(driver: &RefCell<Self>, input: &InputTracker, viewport: Viewport) -> bool {
        match driver.try_borrow_mut() {
            Ok(mut d) => {
                d.resize(viewport);
                true
            }
            Err(_) => {
                log::debug!("[field] resize during frame, deferring");
                input.viewport_changed(viewport);
                false
            }
        }
    }

    #[inline]
    pub fn field(&self) -> &NodeField {
        &self.field
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kill_is_shared_and_idempotent() {
        let a = Liveness::new();
        let b = a.clone();
        assert!(b.is_alive());
        a.kill();
        a.kill();
        assert!(!b.is_alive());
        assert!(!Liveness::dead().is_alive());
    }
}
