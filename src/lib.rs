#![cfg(target_arch = "wasm32")]
use nodefield_core::{FieldConfig, FrameDriver, InputTracker, Liveness, NodeField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;

use canvas::CanvasSurface;
use events::Listener;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("nodefield-web starting");
    Ok(())
}

/// Everything a live mount owns besides the canvas.
struct Running {
    // kept so the resize listener and frame loop share one driver
    _driver: Rc<RefCell<FrameDriver<CanvasSurface>>>,
    frame_loop: frame::FrameLoop,
    listeners: Vec<Listener>,
}

/// Returned by [`mount`]; call `unmount()` (or let JS free it) to stop the
/// animation and detach every listener.
#[wasm_bindgen]
pub struct NodeFieldHandle {
    liveness: Liveness,
    canvas: Option<web::HtmlCanvasElement>,
    owns_canvas: bool,
    running: Option<Running>,
}

#[wasm_bindgen]
impl NodeFieldHandle {
    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.liveness.is_alive() && self.running.is_some()
    }

    pub fn unmount(&mut self) {
        // kill first: a frame already queued must find the token dead
        self.liveness.kill();
        if let Some(running) = self.running.take() {
            running.frame_loop.cancel();
            drop(running.listeners);
        }
        if let Some(canvas) = self.canvas.take() {
            if self.owns_canvas {
                canvas.remove();
            }
            log::info!("[mount] unmounted");
        }
    }
}

impl Drop for NodeFieldHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Start the node field.
///
/// `canvas_id` names an existing canvas; without it a canvas is created under
/// `<body>`. `config_json` is an optional object of `FieldConfig` overrides.
#[wasm_bindgen]
pub fn mount(
    canvas_id: Option<String>,
    config_json: Option<String>,
) -> Result<NodeFieldHandle, JsValue> {
    mount_inner(canvas_id.as_deref(), config_json.as_deref()).map_err(|e| {
        log::error!("[mount] {e:#}");
        JsValue::from_str(&format!("{e:#}"))
    })
}

fn mount_inner(canvas_id: Option<&str>, config_json: Option<&str>) -> anyhow::Result<NodeFieldHandle> {
    let config = match config_json {
        Some(json) => FieldConfig::from_json(json)?,
        None => FieldConfig::default(),
    };
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let viewport = dom::viewport_size(&window);
    let field = NodeField::new(config, viewport)?;
    let (canvas, owns_canvas) = dom::acquire_canvas(&document, canvas_id)?;
    dom::style_as_background(&canvas);

    let Some(ctx) = dom::context_2d(&canvas) else {
        // blank layer, no loop
        log::error!("[mount] 2d context unavailable; node field disabled");
        return Ok(NodeFieldHandle {
            liveness: Liveness::dead(),
            canvas: Some(canvas),
            owns_canvas,
            running: None,
        });
    };

    dom::sync_canvas_backing_size(&canvas, viewport);

    let input = Rc::new(InputTracker::new());
    input.scrolled(dom::scroll_offset(&window));

    let liveness = Liveness::new();
    let driver = Rc::new(RefCell::new(FrameDriver::new(
        field,
        CanvasSurface::new(canvas.clone(), ctx),
        input.clone(),
        liveness.clone(),
    )));

    let listeners = match wire_listeners(&window, &document, &driver, &input) {
        Ok(listeners) => listeners,
        Err(e) => {
            if owns_canvas {
                canvas.remove();
            }
            return Err(e);
        }
    };

    let frame_loop = frame::start_loop(driver.clone(), liveness.clone());
    log::info!("[mount] running on {}x{}", viewport.width, viewport.height);

    Ok(NodeFieldHandle {
        liveness,
        canvas: Some(canvas),
        owns_canvas,
        running: Some(Running {
            _driver: driver,
            frame_loop,
            listeners,
        }),
    })
}

fn wire_listeners(
    window: &web::Window,
    document: &web::Document,
    driver: &Rc<RefCell<FrameDriver<CanvasSurface>>>,
    input: &Rc<InputTracker>,
) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = events::pointer::wire_pointer(document, input)?;
    listeners.push(events::viewport::wire_scroll(window, input)?);
    listeners.push(events::viewport::wire_resize(window, driver, input)?);
    Ok(listeners)
}
