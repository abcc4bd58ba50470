//! Contact form submit handler

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::dom;
use crate::ui::form::{ButtonView, Field, FormError, SubmitFlow, THANK_YOU_MESSAGE};

const FORM_ID: &str = "contactForm";

fn field_value(form: &HtmlFormElement, field: Field) -> String {
    let Ok(Some(el)) = form.query_selector(field.selector()) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn apply(button: &HtmlButtonElement, view: &ButtonView) {
    button.set_text_content(Some(&view.label));
    button.set_disabled(view.disabled);
}

pub fn init_contact_form(send_delay_ms: u32) -> Result<(), JsValue> {
    let Some(form) = dom::by_id::<HtmlFormElement>(FORM_ID) else {
        log::debug!("#{FORM_ID} not found, skipping");
        return Ok(());
    };
    let flow = Rc::new(RefCell::new(SubmitFlow::new()));

    let target = form.clone();
    dom::listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        let form = &target;
        let values = Field::ALL.map(|field| field_value(form, field));
        let button = form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let current_label = button
            .as_ref()
            .and_then(|b| b.text_content())
            .unwrap_or_default();

        let fields = [&*values[0], &*values[1], &*values[2], &*values[3]];
        let view = match flow.borrow_mut().submit(fields, &current_label) {
            Ok(Some(view)) => view,
            Ok(None) => return,
            Err(e @ FormError::MissingField(field)) => {
                log::debug!("Contact form rejected: {field:?} empty");
                dom::alert(&e.to_string());
                return;
            }
        };
        if let Some(button) = &button {
            apply(button, &view);
        }
        log::info!("Contact form sending");

        let flow = flow.clone();
        let form = form.clone();
        let scheduled = dom::set_timeout(send_delay_ms, move || {
            dom::alert(THANK_YOU_MESSAGE);
            form.reset();
            if let (Some(view), Some(button)) = (flow.borrow_mut().finish(), &button) {
                apply(button, &view);
            }
        });
        if let Err(e) = scheduled {
            log::error!("Could not schedule form completion: {e:?}");
        }
    })?;
    Ok(())
}
