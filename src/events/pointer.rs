use crate::constants::{TILT_CARD_SELECTOR, TILT_GLOSS_SELECTOR};
use crate::core::tilt::{TiltConfig, TiltEngine, TiltFrame};
use crate::dom;
use crate::input;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct CardSurface {
    card: web::HtmlElement,
    gloss: Option<web::HtmlElement>,
}

impl CardSurface {
    fn apply(&self, frame: &TiltFrame, perspective_px: f32) {
        dom::set_style(&self.card, "transition", &frame.transition.to_css());
        dom::set_style(&self.card, "transform", &frame.transform.to_css(perspective_px));
        dom::set_style(&self.card, "transform-style", "preserve-3d");
        if let Some(gloss) = &self.gloss {
            dom::set_style(gloss, "opacity", &format!("{:.2}", frame.gloss.opacity));
            dom::set_style(gloss, "background", &frame.gloss.background_css());
        }
    }
}

/// One tracked card. The engine lives in the listener closures and goes
/// away with them.
pub struct TiltCard {
    _listeners: [EventListener; 3],
}

impl TiltCard {
    pub fn attach(card: web::HtmlElement, config: TiltConfig) -> Self {
        let gloss = card
            .query_selector(TILT_GLOSS_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        let surface = Rc::new(CardSurface { card, gloss });
        let engine = Rc::new(RefCell::new(TiltEngine::new(config)));

        let enter = {
            let engine = engine.clone();
            EventListener::new(&surface.card, "mouseenter", move |_| {
                engine.borrow_mut().pointer_enter();
            })
        };

        let moved = {
            let engine = engine.clone();
            let surface = surface.clone();
            let card = surface.card.clone();
            EventListener::new(&card, "mousemove", move |ev| {
                let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                    return;
                };
                let rect = input::surface_rect(&surface.card);
                let mut eng = engine.borrow_mut();
                // Zero-size surface: not laid out yet, nothing to do.
                if let Some(frame) = eng.pointer_move(&rect, input::client_point(ev)) {
                    surface.apply(&frame, eng.config().perspective_px);
                }
            })
        };

        let leave = {
            let surface = surface.clone();
            let card = surface.card.clone();
            EventListener::new(&card, "mouseleave", move |_| {
                let mut eng = engine.borrow_mut();
                let frame = eng.pointer_leave();
                surface.apply(&frame, eng.config().perspective_px);
            })
        };

        Self {
            _listeners: [enter, moved, leave],
        }
    }
}

/// Attach tilt tracking to every card under `root`.
pub fn attach_tilt_cards(root: &web::Element, config: &TiltConfig) -> Vec<TiltCard> {
    let cards: Vec<TiltCard> = dom::query_all(root, TILT_CARD_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|card| TiltCard::attach(card, config.clone()))
        .collect();
    log::debug!("[tilt] tracking {} cards", cards.len());
    cards
}
