// Bindings to the page's `faceapi` global (face-api.js) and the polling loop
// that waits for the first face.

use crate::constants::DETECT_INTERVAL_MS;
use crate::dom::{js_err, Interval};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["faceapi", "nets", "tinyFaceDetector"], js_name = loadFromUri, catch)]
    fn load_tiny_face_detector(uri: &str) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(js_namespace = faceapi)]
    type TinyFaceDetectorOptions;

    #[wasm_bindgen(constructor, js_namespace = faceapi)]
    fn new() -> TinyFaceDetectorOptions;

    // Returns a thenable task rather than a real Promise.
    #[wasm_bindgen(js_namespace = faceapi, js_name = detectSingleFace, catch)]
    fn detect_single_face(
        input: &web::HtmlVideoElement,
        options: &TinyFaceDetectorOptions,
    ) -> Result<JsValue, JsValue>;
}

pub async fn load_model(uri: &str) -> anyhow::Result<()> {
    JsFuture::from(load_tiny_face_detector(uri).map_err(js_err)?)
        .await
        .map_err(js_err)?;
    log::info!("face detector loaded from {}", uri);
    Ok(())
}

pub struct FaceDetector {
    options: TinyFaceDetectorOptions,
}

impl Default for FaceDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceDetector {
    pub fn new() -> Self {
        Self {
            options: TinyFaceDetectorOptions::new(),
        }
    }

    pub async fn face_present(&self, video: &web::HtmlVideoElement) -> anyhow::Result<bool> {
        let task = detect_single_face(video, &self.options).map_err(js_err)?;
        let result = JsFuture::from(js_sys::Promise::resolve(&task))
            .await
            .map_err(js_err)?;
        Ok(!result.is_undefined() && !result.is_null())
    }
}

/// Poll `video` for a face every [`DETECT_INTERVAL_MS`] and call `on_face`
/// exactly once, on the first positive detection. Polling stops afterwards.
///
/// A poll is skipped while the previous detection is still in flight.
pub fn watch_for_face(
    video: web::HtmlVideoElement,
    on_face: impl FnOnce() + 'static,
) -> anyhow::Result<()> {
    let detector = Rc::new(FaceDetector::new());
    let busy = Rc::new(Cell::new(false));
    let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let on_face: Box<dyn FnOnce()> = Box::new(on_face);
    let on_face = Rc::new(RefCell::new(Some(on_face)));

    let interval_tick = interval.clone();
    let poll = Interval::new(DETECT_INTERVAL_MS, move || {
        if busy.get() || on_face.borrow().is_none() {
            return;
        }
        busy.set(true);
        let detector = detector.clone();
        let video = video.clone();
        let busy = busy.clone();
        let on_face = on_face.clone();
        let interval = interval_tick.clone();
        spawn_local(async move {
            match detector.face_present(&video).await {
                Ok(true) => {
                    interval.borrow_mut().take();
                    let callback = on_face.borrow_mut().take();
                    if let Some(callback) = callback {
                        log::info!("face detected");
                        callback();
                    }
                }
                Ok(false) => {}
                Err(e) => log::error!("face detection error: {:?}", e),
            }
            busy.set(false);
        });
    })?;
    *interval.borrow_mut() = Some(poll);
    log::info!("watching for a face every {} ms", DETECT_INTERVAL_MS);
    Ok(())
}
