use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement};

use vitrine_shared::derive_content;

use crate::dom::{self, Listener};

/// Image lightbox for the gallery and project grids. Stateless: every open
/// derives the overlay content fresh from the clicked thumbnail.
pub struct Lightbox {
    _bindings: Vec<Listener>,
}

pub fn init(document: &Document) -> Option<Lightbox> {
    let overlay = document.get_element_by_id("lightboxOverlay")?;
    let image = document
        .get_element_by_id("lightboxImg")?
        .dyn_into::<HtmlImageElement>()
        .ok()?;
    let description = document.get_element_by_id("lightboxDesc")?;
    let close = document.get_element_by_id("lightboxClose")?;

    let mut thumbnails = dom::select_all(document, ".gallery-item img");
    thumbnails.extend(dom::select_all(document, ".project-card img"));
    if thumbnails.is_empty() {
        return None;
    }

    let mut bindings = Vec::new();
    for thumb in thumbnails {
        let overlay = overlay.clone();
        let image = image.clone();
        let description = description.clone();
        let target = thumb.clone();
        let binding = Listener::new(target.as_ref(), "click", move |_event| {
            let src = thumb
                .dyn_ref::<HtmlImageElement>()
                .map(|img| img.src())
                .unwrap_or_default();
            let own_desc = thumb.get_attribute("data-desc");
            let card_desc = thumb
                .closest(".project-card")
                .ok()
                .flatten()
                .and_then(|card| card.get_attribute("data-desc"));
            let content = derive_content(&src, own_desc.as_deref(), card_desc.as_deref());

            image.set_src(&content.image_src);
            description.set_text_content(Some(&content.description));
            dom::set_style(&overlay, "display", "flex");
        });
        if let Some(binding) = binding {
            bindings.push(binding);
        }
    }

    {
        let overlay = overlay.clone();
        let binding = Listener::new(close.as_ref(), "click", move |_event| {
            dom::set_style(&overlay, "display", "none");
        });
        if let Some(binding) = binding {
            bindings.push(binding);
        }
    }

    Some(Lightbox { _bindings: bindings })
}
