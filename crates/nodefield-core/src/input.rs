//! Latest-value input cells.
//!
//! Event listeners overwrite these; the frame loop reads them once per frame.
//! Only the most recent value matters, so nothing is queued.

use crate::node::Viewport;
use glam::Vec2;
use std::cell::Cell;

/// Input as seen by one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub pointer: Option<Vec2>,
    pub scroll_offset: f32,
}

#[derive(Debug, Default)]
pub struct InputTracker {
    pointer: Cell<Option<Vec2>>,
    scroll_offset: Cell<f32>,
    pending_viewport: Cell<Option<Viewport>>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_moved(&self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.pointer.set(Some(Vec2::new(x, y)));
        }
    }

    /// Touch ended or pointer left: no interaction until the next move.
    pub fn pointer_released(&self) {
        self.pointer.set(None);
    }

    pub fn scrolled(&self, offset: f32) {
        if offset.is_finite() {
            self.scroll_offset.set(offset);
        }
    }

    /// Record a viewport size for the frame loop to apply when it next runs.
    pub fn viewport_changed(&self, viewport: Viewport) {
        self.pending_viewport.set(Some(viewport));
    }

    pub fn take_pending_viewport(&self) -> Option<Viewport> {
        self.pending_viewport.take()
    }

    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer.get()
    }

    #[inline]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset.get()
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            pointer: self.pointer.get(),
            scroll_offset: self.scroll_offset.get(),
        }
    }
}
