use crate::dom::js_err;
use anyhow::anyhow;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Request the user-facing camera and play it into `video`.
///
/// Resolves once the element has loaded the stream metadata, so the video
/// dimensions are known before detection starts.
pub async fn attach_user_camera(video: &web::HtmlVideoElement) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let devices = window.navigator().media_devices().map_err(js_err)?;

    let video_constraints = js_sys::Object::new();
    js_sys::Reflect::set(
        &video_constraints,
        &JsValue::from_str("facingMode"),
        &JsValue::from_str("user"),
    )
    .map_err(js_err)?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_video(&video_constraints);

    let stream: web::MediaStream = JsFuture::from(
        devices
            .get_user_media_with_constraints(&constraints)
            .map_err(js_err)?,
    )
    .await
    .map_err(js_err)?
    .dyn_into()
    .map_err(|e| anyhow!("getUserMedia returned {:?}", e))?;

    let loaded = js_sys::Promise::new(&mut |resolve, _reject| {
        video.set_onloadedmetadata(Some(&resolve));
    });
    video.set_src_object(Some(&stream));
    JsFuture::from(loaded).await.map_err(js_err)?;
    video.set_onloadedmetadata(None);

    log::info!(
        "camera attached: {}x{}",
        video.video_width(),
        video.video_height()
    );
    Ok(())
}
