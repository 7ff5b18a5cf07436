use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn element_by_id(document: &web::Document, id: &str) -> Option<web::Element> {
    document.get_element_by_id(id)
}

/// Dynamic style goes through the attribute; static styling stays in CSS.
#[inline]
pub fn set_style(el: &web::Element, style: &str) {
    let _ = el.set_attribute("style", style);
}

#[inline]
pub fn set_text(el: &web::Element, text: &str) {
    el.set_text_content(Some(text));
}

#[inline]
pub fn hide(el: &web::Element) {
    let _ = el.set_attribute("style", "display:none");
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Hand the mail-composition intent to the browser; everything past the
/// navigation is the mail client's business.
pub fn open_mail_intent(url: &str) {
    if let Some(w) = web::window() {
        if w.location().set_href(url).is_err() {
            log::warn!("[dom] mail intent navigation rejected");
        }
    }
}

/// Client-space bounding box of an element, as the effect layer wants it.
#[inline]
pub fn element_rect(el: &web::Element) -> folio_core::ElementRect {
    let r = el.get_bounding_client_rect();
    folio_core::ElementRect {
        left: r.left() as f32,
        top: r.top() as f32,
        width: r.width() as f32,
        height: r.height() as f32,
    }
}

/// Event target as an element, if it is one.
#[inline]
pub fn event_target_element(ev: &web::Event) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}
