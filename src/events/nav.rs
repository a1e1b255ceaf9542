use crate::constants::{CLASS_ACTIVE, HAMBURGER_ID, HEADER_ID, MENU_TOGGLE_ID, NAV_MENU_ID};
use crate::core::scroll::anchor_scroll_target;
use crate::dom;
use gloo::events::{EventListener, EventListenerOptions};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// In-page anchor navigation plus the mobile menu toggle.
pub struct NavWiring {
    listeners: Vec<EventListener>,
}

impl NavWiring {
    pub fn attach(document: &web::Document, root: &web::Element) -> Self {
        let menu_open = Rc::new(Cell::new(false));
        let mut listeners = Vec::new();

        if let Some(toggle) = dom::element_by_id(document, MENU_TOGGLE_ID) {
            let doc = document.clone();
            let open = menu_open.clone();
            listeners.push(EventListener::new(&toggle, "click", move |_| {
                set_menu_open(&doc, &open, !open.get());
            }));
        }

        for link in dom::query_all(root, "a[href^='#']") {
            let Some(href) = link.get_attribute("href") else {
                continue;
            };
            let doc = document.clone();
            let open = menu_open.clone();
            let listener = EventListener::new_with_options(
                &link,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |ev| {
                    ev.prevent_default();
                    set_menu_open(&doc, &open, false);
                    scroll_to_anchor(&doc, &href);
                },
            );
            listeners.push(listener);
        }

        log::debug!("[nav] wired {} listeners", listeners.len());
        Self { listeners }
    }

    pub fn detach(&mut self) {
        self.listeners.clear();
    }
}

fn set_menu_open(document: &web::Document, state: &Cell<bool>, open: bool) {
    state.set(open);
    for id in [NAV_MENU_ID, HAMBURGER_ID] {
        if let Some(el) = dom::element_by_id(document, id) {
            dom::set_class(&el, CLASS_ACTIVE, open);
        }
    }
}

fn scroll_to_anchor(document: &web::Document, href: &str) {
    if href == "#" {
        dom::smooth_scroll_to(0.0);
        return;
    }
    let Some(target) = dom::element_by_id(document, href.trim_start_matches('#')) else {
        return;
    };
    let header_height = dom::element_by_id(document, HEADER_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0);
    let top = target.get_bounding_client_rect().top();
    dom::smooth_scroll_to(anchor_scroll_target(top, dom::current_scroll_y(), header_height));
}
