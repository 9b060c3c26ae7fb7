use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
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

/// Layout viewport in CSS px.
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

/// True on touch-only devices, where the custom cursor stays off.
pub fn lacks_hover(window: &web::Window) -> bool {
    window
        .match_media("(hover: none)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    collect(root.query_selector_all(selector).ok())
}

pub fn query_document(document: &web::Document, selector: &str) -> Vec<web::Element> {
    collect(document.query_selector_all(selector).ok())
}

fn collect(list: Option<web::NodeList>) -> Vec<web::Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn html_element(id: &str) -> Option<web::HtmlElement> {
    window_document()?
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlElement>()
        .ok()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, name: &str, value: &str) {
    let _ = el.style().set_property(name, value);
}
