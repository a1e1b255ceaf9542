use crate::constants::{FORM_RESULT_ID, SUBMIT_BUTTON_ID, SUBMIT_LABEL, SUBMIT_LABEL_SENDING};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

// Status banner above the contact form.

#[inline]
pub fn show_result(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(FORM_RESULT_ID) {
        el.set_text_content(Some(message));
        dom::set_visible(&el, true);
    }
}

#[inline]
pub fn hide_result(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(FORM_RESULT_ID) {
        el.set_text_content(None);
        dom::set_visible(&el, false);
    }
}

/// Disable the submit button and swap its label while a send is in flight.
pub fn set_sending(document: &web::Document, sending: bool) {
    if let Some(btn) = document
        .get_element_by_id(SUBMIT_BUTTON_ID)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    {
        btn.set_disabled(sending);
        btn.set_text_content(Some(if sending {
            SUBMIT_LABEL_SENDING
        } else {
            SUBMIT_LABEL
        }));
        dom::set_class(&btn, "button-disabled", sending);
    }
}
