use chrono::Datelike;
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::dom::Listener;

const FORM_NOTICE: &str =
    "This form is frontend-only. Connect to Google Forms or backend to store responses.";

/// Contact form placeholder: submission is intercepted, a notice is surfaced,
/// and the fields reset. Nothing is validated, sent, or stored.
pub struct ContactForm {
    _binding: Option<Listener>,
}

pub fn init(document: &Document) -> ContactForm {
    set_footer_year(document);

    let binding = document
        .get_element_by_id("contactForm")
        .and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok())
        .and_then(|form| {
            let target = form.clone();
            Listener::new(target.as_ref(), "submit", move |event| {
                event.prevent_default();
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(FORM_NOTICE);
                }
                form.reset();
            })
        });

    ContactForm { _binding: binding }
}

fn set_footer_year(document: &Document) {
    let Some(span) = document.get_element_by_id("yearSpan") else {
        return;
    };
    span.set_text_content(Some(&chrono::Local::now().year().to_string()));
}
