use crate::constants::FLASH_OVERLAY_ID;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn flash_element(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(FLASH_OVERLAY_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Light up the white flash overlay. Its CSS owns the transition timing.
#[inline]
pub fn flash_on(document: &web::Document) {
    if let Some(el) = flash_element(document) {
        dom::set_opacity(&el, 1.0);
    }
}

#[inline]
pub fn flash_off(document: &web::Document) {
    if let Some(el) = flash_element(document) {
        dom::set_opacity(&el, 0.0);
    }
}
