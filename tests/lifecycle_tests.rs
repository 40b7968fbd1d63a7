// Host-side tests for resize and teardown through the frame driver.

mod support;

use glam::Vec2;
use nodefield_core::{FieldConfig, FrameDriver, InputTracker, Liveness, NodeField, Viewport};
use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;
use support::{Op, Recorder};

fn make_driver(viewport: Viewport) -> (FrameDriver<Recorder>, Rc<InputTracker>, Liveness) {
    let field = NodeField::with_seed(FieldConfig::default(), viewport, 42).unwrap();
    let input = Rc::new(InputTracker::new());
    let liveness = Liveness::new();
    let driver = FrameDriver::new(field, Recorder::default(), input.clone(), liveness.clone());
    (driver, input, liveness)
}

#[test]
fn tick_reads_latest_input() {
    let (mut driver, input, _live) = make_driver(Viewport::new(800.0, 600.0));
    input.pointer_moved(10.0, 10.0);
    input.pointer_moved(400.0, 300.0);
    input.scrolled(120.0);
    assert_eq!(driver.tick(), ControlFlow::Continue(()));
    assert_eq!(driver.field().frame(), 1);
    for (from, _, _) in driver.surface().lines() {
        assert_eq!(from, Vec2::new(400.0, 300.0));
    }
}

#[test]
fn resize_replaces_the_whole_pool() {
    let (mut driver, _input, _live) = make_driver(Viewport::new(800.0, 600.0));
    assert_eq!(driver.field().pool.len(), 240);
    driver.tick();
    let old_first = driver.field().pool.get(0).cloned();

    driver.resize(Viewport::new(400.0, 300.0));
    assert_eq!(driver.field().pool.len(), 60);
    assert_eq!(driver.field().viewport(), Viewport::new(400.0, 300.0));
    assert_ne!(driver.field().pool.get(0).cloned(), old_first);
    assert!(driver
        .surface()
        .ops
        .contains(&Op::Resize(Viewport::new(400.0, 300.0))));
    for n in driver.field().pool.iter() {
        assert!(n.position.x <= 400.0 && n.position.y <= 300.0);
    }
}

#[test]
fn resize_during_a_frame_is_deferred_to_next_tick() {
    let (driver, input, _live) = make_driver(Viewport::new(800.0, 600.0));
    let driver = Rc::new(RefCell::new(driver));

    {
        // frame in flight holds the driver
        let _in_flight = driver.borrow_mut();
        let applied = FrameDriver::resize_or_defer(&*driver, &input, Viewport::new(400.0, 300.0));
        assert!(!applied);
    }
    assert_eq!(driver.borrow().field().pool.len(), 240);

    assert_eq!(driver.borrow_mut().tick(), ControlFlow::Continue(()));
    assert_eq!(driver.borrow().field().pool.len(), 60);
    assert_eq!(input.take_pending_viewport(), None);
}

#[test]
fn idle_resize_applies_immediately() {
    let (driver, input, _live) = make_driver(Viewport::new(800.0, 600.0));
    let driver = RefCell::new(driver);
    assert!(FrameDriver::resize_or_defer(&driver, &input, Viewport::new(400.0, 300.0)));
    assert_eq!(driver.borrow().field().pool.len(), 60);
    assert_eq!(input.take_pending_viewport(), None);
}

#[test]
fn no_draw_calls_after_teardown() {
    let (mut driver, input, live) = make_driver(Viewport::new(800.0, 600.0));
    input.pointer_moved(200.0, 200.0);
    for _ in 0..5 {
        driver.tick();
    }
    let calls = driver.surface().draw_calls();
    assert!(calls > 0);

    live.kill();
    input.viewport_changed(Viewport::new(100.0, 100.0));
    for _ in 0..5 {
        assert_eq!(driver.tick(), ControlFlow::Break(()));
    }
    driver.resize(Viewport::new(50.0, 50.0));
    assert_eq!(driver.surface().draw_calls(), calls);
    assert_eq!(driver.surface().ops.len(), calls);
    assert_eq!(driver.field().frame(), 5);
}

#[test]
fn touch_end_stops_connectors() {
    let (mut driver, input, _live) = make_driver(Viewport::new(800.0, 600.0));
    input.pointer_moved(400.0, 300.0);
    driver.tick();
    assert!(driver.surface().lines().count() > 0);
    input.pointer_released();
    let before = driver.surface().lines().count();
    driver.tick();
    assert_eq!(driver.surface().lines().count(), before);
}
