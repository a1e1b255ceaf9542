use crate::core::tilt::SurfaceRect;
use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn surface_rect(el: &web::Element) -> SurfaceRect {
    let rect = el.get_bounding_client_rect();
    SurfaceRect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

#[inline]
pub fn client_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Value of an `<input>` or `<textarea>` event target.
pub fn field_value(ev: &web::Event) -> Option<(String, String)> {
    use wasm_bindgen::JsCast;
    let target = ev.target()?;
    if let Some(input) = target.dyn_ref::<web::HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    if let Some(area) = target.dyn_ref::<web::HtmlTextAreaElement>() {
        return Some((area.name(), area.value()));
    }
    None
}
