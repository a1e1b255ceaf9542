use crate::constants::{CLASS_BLINK, HERO_CURSOR_ID, HERO_TITLE_TEXT_ID};
use crate::core::typing::{Typewriter, TypingState, TypingTiming};
use crate::dom;
use gloo::timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct TypingInner {
    writer: Typewriter,
    timing: TypingTiming,
    text_el: web::Element,
    cursor_el: Option<web::Element>,
    delay: Option<Timeout>,
    ticks: Option<Interval>,
}

impl TypingInner {
    fn render(&self, state: &TypingState) {
        self.text_el.set_text_content(Some(&state.revealed_text));
        if let Some(cursor) = &self.cursor_el {
            dom::set_class(cursor, CLASS_BLINK, state.is_complete);
        }
    }
}

/// Drives the hero title typewriter from browser timers.
///
/// Dropping the driver (or calling `stop`) cancels the pending initial delay
/// and any scheduled ticks.
pub struct TypingDriver {
    inner: Rc<RefCell<TypingInner>>,
}

impl TypingDriver {
    pub fn mount(document: &web::Document, target: &str, timing: TypingTiming) -> Option<Self> {
        let text_el = dom::element_by_id(document, HERO_TITLE_TEXT_ID)?;
        let cursor_el = dom::element_by_id(document, HERO_CURSOR_ID);
        let driver = Self {
            inner: Rc::new(RefCell::new(TypingInner {
                writer: Typewriter::new(target),
                timing,
                text_el,
                cursor_el,
                delay: None,
                ticks: None,
            })),
        };
        driver.start();
        Some(driver)
    }

    /// Start over from the empty prefix, optionally typing a new target.
    pub fn restart(&self, target: Option<String>) {
        self.stop();
        self.inner.borrow_mut().writer.restart(target);
        self.start();
    }

    pub fn stop(&self) {
        let (delay, ticks) = {
            let mut inner = self.inner.borrow_mut();
            (inner.delay.take(), inner.ticks.take())
        };
        drop(delay);
        drop(ticks);
    }

    fn start(&self) {
        let (delay_ms, tick_ms) = {
            let inner = self.inner.borrow();
            inner.render(&TypingState::default());
            (
                inner.timing.initial_delay.as_millis() as u32,
                inner.timing.tick.as_millis() as u32,
            )
        };
        let weak = Rc::downgrade(&self.inner);
        let delay = Timeout::new(delay_ms, move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let first = {
                let mut guard = inner.borrow_mut();
                guard.delay = None;
                guard.writer.state()
            };
            inner.borrow().render(&first);
            if first.is_complete {
                log::debug!("[typing] empty target, nothing to animate");
                return;
            }
            let weak_tick = Rc::downgrade(&inner);
            let ticks = Interval::new(tick_ms, move || {
                let Some(inner) = weak_tick.upgrade() else {
                    return;
                };
                let next = inner.borrow_mut().writer.step();
                match next {
                    Some(state) => {
                        inner.borrow().render(&state);
                        if state.is_complete {
                            log::info!("[typing] complete: {}", state.revealed_text);
                            let finished = inner.borrow_mut().ticks.take();
                            drop(finished);
                        }
                    }
                    None => {
                        let finished = inner.borrow_mut().ticks.take();
                        drop(finished);
                    }
                }
            });
            inner.borrow_mut().ticks = Some(ticks);
        });
        self.inner.borrow_mut().delay = Some(delay);
    }
}

impl Drop for TypingDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
