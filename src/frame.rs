use crate::canvas::CanvasSurface;
use crate::constants::FRAME_STATS_INTERVAL_SEC;
use instant::Instant;
use nodefield_core::{FrameDriver, Liveness};
use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running `requestAnimationFrame` chain.
pub struct FrameLoop {
    tick: Tick,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Cancel the queued frame and release the callback. The driver's
    /// liveness must already be killed so a frame that slips through is a
    /// no-op.
    pub fn cancel(self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // breaks the closure -> tick -> closure cycle
        drop(self.tick.borrow_mut().take());
    }
}

struct FrameStats {
    since: Instant,
    frames: u32,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            since: Instant::now(),
            frames: 0,
        }
    }

    fn record(&mut self, nodes: usize) {
        self.frames += 1;
        let elapsed = self.since.elapsed().as_secs_f32();
        if elapsed >= FRAME_STATS_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.1} fps, {} nodes",
                self.frames as f32 / elapsed,
                nodes
            );
            self.since = Instant::now();
            self.frames = 0;
        }
    }
}

fn request_frame(tick: &Tick, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    let tick_ref = tick.borrow();
    let Some(cb) = tick_ref.as_ref() else {
        return;
    };
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => pending.set(Some(id)),
        Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
    }
}

pub fn start_loop(driver: Rc<RefCell<FrameDriver<CanvasSurface>>>, liveness: Liveness) -> FrameLoop {
    let tick: Tick = Rc::new(RefCell::new(None));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    let mut stats = FrameStats::new();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        if !liveness.is_alive() {
            return;
        }
        let flow = match driver.try_borrow_mut() {
            Ok(mut d) => {
                let flow = d.tick();
                if flow.is_continue() {
                    stats.record(d.field().pool.len());
                }
                flow
            }
            // driver busy elsewhere; try again next refresh
            Err(_) => ControlFlow::Continue(()),
        };
        if flow.is_break() {
            log::debug!("[frame] loop stopped");
            return;
        }
        request_frame(&tick_clone, &pending_clone);
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &pending);
    FrameLoop { tick, pending }
}
