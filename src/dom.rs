use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn element_by_id(document: &web::Document, id: &str) -> Option<web::Element> {
    document.get_element_by_id(id)
}

/// All elements under `root` matching `selector`, skipping non-elements.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_visible(el: &web::Element, visible: bool) {
    if visible {
        _ = el.set_attribute("style", "");
    } else {
        _ = el.set_attribute("style", "display:none");
    }
}

pub fn current_scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smoothly animate the window scroll position to `top`.
pub fn smooth_scroll_to(top: f64) {
    if let Some(w) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}

pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}
