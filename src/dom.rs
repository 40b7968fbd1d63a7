use crate::constants::{BACKGROUND_STYLE, CREATED_CANVAS_ID};
use nodefield_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Inner window size in CSS pixels; zero if the browser refuses to say.
pub fn viewport_size(window: &web::Window) -> Viewport {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

#[inline]
pub fn scroll_offset(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Find `#id` or create a canvas under `<body>`. The flag is true when the
/// canvas was created here and should be removed again on unmount.
pub fn acquire_canvas(
    document: &web::Document,
    id: Option<&str>,
) -> anyhow::Result<(web::HtmlCanvasElement, bool)> {
    if let Some(id) = id {
        let el = document
            .get_element_by_id(id)
            .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?;
        let canvas = el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| anyhow::anyhow!("#{id} is not a canvas"))?;
        return Ok((canvas, false));
    }
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("created element is not a canvas"))?;
    canvas.set_id(CREATED_CANVAS_ID);
    body.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    Ok((canvas, true))
}

pub fn style_as_background(canvas: &web::HtmlCanvasElement) {
    let style = canvas.style();
    for (name, value) in BACKGROUND_STYLE {
        if let Err(e) = style.set_property(name, value) {
            log::warn!("[mount] style {name}: {:?}", e);
        }
    }
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width(viewport.width as u32);
    canvas.set_height(viewport.height as u32);
}
