use crate::constants::{field_error_id, CLASS_ERROR, CONTACT_FORM_ID};
use crate::core::form::{ContactForm, Field, SubmitOutcome, SubmitTiming, ValidationRules};
use crate::dom;
use crate::input;
use crate::overlay;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ContactInner {
    form: ContactForm,
    timing: SubmitTiming,
    document: web::Document,
    send_timer: Option<Timeout>,
    clear_timer: Option<Timeout>,
}

impl ContactInner {
    fn render_field_error(&self, field: Field) {
        let message = self.form.error(field);
        if let Some(input) = dom::element_by_id(&self.document, field.key()) {
            dom::set_class(&input, CLASS_ERROR, message.is_some());
        }
        if let Some(span) = dom::element_by_id(&self.document, &field_error_id(field.key())) {
            span.set_text_content(message);
            dom::set_visible(&span, message.is_some());
        }
    }

    fn render_errors(&self) {
        for field in Field::ALL {
            self.render_field_error(field);
        }
    }

    fn render_values(&self) {
        for field in Field::ALL {
            let Some(el) = dom::element_by_id(&self.document, field.key()) else {
                continue;
            };
            let value = self.form.record().get(field);
            if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
                input.set_value(value);
            } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
                area.set_value(value);
            }
        }
    }
}

/// Contact form wiring with the simulated send.
///
/// Both pending timers (send completion and success auto-clear) are owned
/// here and cancelled on `unmount` or drop.
pub struct ContactView {
    inner: Rc<RefCell<ContactInner>>,
    listeners: Vec<EventListener>,
}

impl ContactView {
    pub fn mount(
        document: &web::Document,
        rules: ValidationRules,
        timing: SubmitTiming,
    ) -> anyhow::Result<Option<Self>> {
        let Some(form_el) = dom::element_by_id(document, CONTACT_FORM_ID) else {
            return Ok(None);
        };
        let inner = Rc::new(RefCell::new(ContactInner {
            form: ContactForm::new(rules)?,
            timing,
            document: document.clone(),
            send_timer: None,
            clear_timer: None,
        }));
        inner.borrow().render_errors();

        let on_input = {
            let inner = inner.clone();
            EventListener::new(&form_el, "input", move |ev| {
                let Some((name, value)) = input::field_value(ev) else {
                    return;
                };
                let Some(field) = Field::from_key(&name) else {
                    return;
                };
                let mut guard = inner.borrow_mut();
                let had_error = guard.form.error(field).is_some();
                guard.form.edit(field, value);
                if had_error {
                    guard.render_field_error(field);
                }
            })
        };

        let on_submit = {
            let inner = inner.clone();
            EventListener::new_with_options(
                &form_el,
                "submit",
                EventListenerOptions::enable_prevent_default(),
                move |ev| {
                    ev.prevent_default();
                    submit(&inner);
                },
            )
        };

        Ok(Some(Self {
            inner,
            listeners: vec![on_input, on_submit],
        }))
    }

    pub fn unmount(&mut self) {
        self.listeners.clear();
        let mut inner = self.inner.borrow_mut();
        inner.send_timer = None;
        inner.clear_timer = None;
    }
}

impl Drop for ContactView {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn submit(inner: &Rc<RefCell<ContactInner>>) {
    let outcome = inner.borrow_mut().form.submit();
    match outcome {
        SubmitOutcome::Busy => {}
        SubmitOutcome::Rejected => {
            let guard = inner.borrow();
            log::info!(
                "[contact] rejected with {} field error(s)",
                guard.form.errors().len()
            );
            guard.render_errors();
        }
        SubmitOutcome::Sending => {
            let mut guard = inner.borrow_mut();
            guard.render_errors();
            overlay::set_sending(&guard.document, true);
            log::info!("[contact] sending");
            let delay_ms = guard.timing.send_delay.as_millis() as u32;
            let weak = Rc::downgrade(inner);
            guard.send_timer = Some(Timeout::new(delay_ms, move || {
                if let Some(inner) = weak.upgrade() {
                    finish_send(&inner);
                }
            }));
        }
    }
}

fn finish_send(inner: &Rc<RefCell<ContactInner>>) {
    let mut guard = inner.borrow_mut();
    let sent_timer = guard.send_timer.take();
    if !guard.form.finish_send() {
        return;
    }
    overlay::set_sending(&guard.document, false);
    if let Some(message) = guard.form.result_message() {
        overlay::show_result(&guard.document, message);
    }
    guard.render_values();
    log::info!("[contact] sent");

    let ttl_ms = guard.timing.success_ttl.as_millis() as u32;
    let weak = Rc::downgrade(inner);
    guard.clear_timer = Some(Timeout::new(ttl_ms, move || {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let mut guard = inner.borrow_mut();
        guard.form.clear_result();
        overlay::hide_result(&guard.document);
        let expired = guard.clear_timer.take();
        drop(guard);
        drop(expired);
    }));
    drop(guard);
    drop(sent_timer);
}
