use crate::camera;
use crate::canvas::CanvasSurface;
use crate::constants::{
    FIREWORKS_CANVAS_ID, FLASH_OVERLAY_ID, MAIN_VIDEO_ID, MODEL_URI, WEBCAM_ID,
};
use crate::detect;
use crate::dom;
use crate::frame;
use crate::sequence::{self, Stage};
use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_to_window(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_to_window(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("face-fireworks starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let webcam: web::HtmlVideoElement = dom::element_by_id(&document, WEBCAM_ID)?;
    let main_video: web::HtmlVideoElement = dom::element_by_id(&document, MAIN_VIDEO_ID)?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, FIREWORKS_CANVAS_ID)?;
    if document.get_element_by_id(FLASH_OVERLAY_ID).is_none() {
        log::warn!("missing #{}; flash cues will be skipped", FLASH_OVERLAY_ID);
    }

    wire_canvas_resize(&canvas);
    let display = frame::create_display(CanvasSurface::new(canvas.clone())?)?;

    detect::load_model(MODEL_URI).await?;
    camera::attach_user_camera(&webcam).await?;

    let stage = Stage {
        document,
        webcam: webcam.clone(),
        main_video,
        canvas,
        display,
    };
    detect::watch_for_face(webcam, move || {
        if let Err(e) = sequence::run_reveal(stage) {
            log::error!("reveal error: {:?}", e);
        }
    })
}
