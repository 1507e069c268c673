use crate::constants::*;
use crate::dom;
use folio_core::{
    relay_error_message, ContactError, ContactForm, ContactPayload, ContactState, Field,
    SubmitAction, SubmitStatus,
};
use gloo_net::http::Request;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const FIELDS: [Field; 3] = [Field::Name, Field::Email, Field::Message];

/// The form's controls, looked up once.
struct ContactView {
    form: web::HtmlFormElement,
    status: Option<web::Element>,
    button: Option<web::HtmlButtonElement>,
}

impl ContactView {
    fn control(&self, name: &str) -> Option<web::Element> {
        self.form
            .query_selector(&format!("[name=\"{}\"]", name))
            .ok()
            .flatten()
    }

    fn value(&self, name: &str) -> String {
        let Some(el) = self.control(name) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn set_value(&self, name: &str, value: &str) {
        let Some(el) = self.control(name) else {
            return;
        };
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    fn read(&self) -> ContactForm {
        ContactForm {
            name: self.value(Field::Name.name()),
            email: self.value(Field::Email.name()),
            message: self.value(Field::Message.name()),
            company: self.value(HONEYPOT_FIELD),
        }
    }

    fn write_back(&self, form: &ContactForm) {
        self.set_value(Field::Name.name(), &form.name);
        self.set_value(Field::Email.name(), &form.email);
        self.set_value(Field::Message.name(), &form.message);
    }

    fn render(&self, state: &ContactState) {
        for field in FIELDS {
            let err = state.error_for(field);
            let selector = format!("[{}=\"{}\"]", ATTR_ERROR_FOR, field.name());
            if let Some(slot) = self.form.query_selector(&selector).ok().flatten() {
                let text = err.map(|e| e.to_string());
                slot.set_text_content(text.as_deref());
            }
            if let Some(control) = self.control(field.name()) {
                if err.is_some() {
                    _ = control.set_attribute("aria-invalid", "true");
                } else {
                    _ = control.remove_attribute("aria-invalid");
                }
            }
        }

        if let Some(status) = &self.status {
            status.set_text_content(state.status.message());
            let list = status.class_list();
            _ = list.toggle_with_force(STATUS_OK_CLASS, matches!(state.status, SubmitStatus::Sent(_)));
            _ = list.toggle_with_force(
                STATUS_ERR_CLASS,
                matches!(state.status, SubmitStatus::Failed(_)),
            );
        }

        if let Some(button) = &self.button {
            let sending = state.status.is_sending();
            button.set_disabled(sending);
            button.set_text_content(Some(if sending { SENDING_LABEL } else { SEND_LABEL }));
        }
    }
}

/// POST the payload as JSON. Non-2xx answers carry the relay's own message
/// when its body has one.
async fn relay(endpoint: &str, payload: &ContactPayload) -> Result<(), ContactError> {
    let resp = Request::post(endpoint)
        .header("Accept", "application/json")
        .json(payload)
        .map_err(|e| ContactError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;
    if resp.ok() {
        return Ok(());
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ContactError::Rejected {
        status,
        message: relay_error_message(&body),
    })
}

pub fn wire_contact(document: &web::Document) -> anyhow::Result<()> {
    let Some(form_el) = document.get_element_by_id(CONTACT_FORM_ID) else {
        log::info!("[contact] no #{} on this page", CONTACT_FORM_ID);
        return Ok(());
    };
    let form = form_el
        .dyn_into::<web::HtmlFormElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a form: {:?}", CONTACT_FORM_ID, e))?;
    let button = form
        .query_selector("button[type=\"submit\"], button:not([type])")
        .ok()
        .flatten()
        .and_then(|b| b.dyn_into::<web::HtmlButtonElement>().ok());
    let view = Rc::new(ContactView {
        status: document.get_element_by_id(CONTACT_STATUS_ID),
        button,
        form,
    });
    let state = Rc::new(RefCell::new(ContactState::default()));
    view.render(&state.borrow());

    let (v, s) = (view.clone(), state.clone());
    dom::listen_forever(&view.form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let endpoint = v.form.get_attribute(ATTR_ENDPOINT);
        let action = {
            let mut st = s.borrow_mut();
            st.form = v.read();
            st.submit(endpoint.as_deref())
        };
        v.render(&s.borrow());

        match action {
            SubmitAction::Ignore => {}
            SubmitAction::Invalid => log::debug!("[contact] {} field errors", s.borrow().errors.len()),
            SubmitAction::Blocked => log::warn!("[contact] {} not set on form", ATTR_ENDPOINT),
            SubmitAction::Send { endpoint, payload } => {
                let (v, s) = (v.clone(), s.clone());
                spawn_local(async move {
                    let result = relay(&endpoint, &payload).await;
                    let sent = result.is_ok();
                    let mut st = s.borrow_mut();
                    st.finish(result);
                    if sent {
                        log::info!("[contact] message sent");
                        v.write_back(&st.form);
                    }
                    v.render(&st);
                });
            }
        }
    });
    log::info!("[contact] form wired");
    Ok(())
}
