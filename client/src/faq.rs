use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use vitrine_shared::FaqAccordion;

use crate::dom::{self, Listener};

/// FAQ accordion: clicking a question opens that item exclusively; clicking
/// the open item closes it.
pub struct FaqPanel {
    accordion: FaqAccordion,
    items: Vec<Element>,
    _bindings: Vec<Listener>,
}

pub fn init(document: &Document) -> Option<Rc<RefCell<FaqPanel>>> {
    let items = dom::select_all(document, ".faq-item");
    if items.is_empty() {
        return None;
    }

    let panel = Rc::new(RefCell::new(FaqPanel {
        accordion: FaqAccordion::default(),
        items,
        _bindings: Vec::new(),
    }));

    let mut bindings = Vec::new();
    {
        let panel_ref = panel.borrow();
        for (idx, item) in panel_ref.items.iter().enumerate() {
            let Some(question) = item.query_selector(".faq-question").ok().flatten() else {
                continue;
            };
            let weak = Rc::downgrade(&panel);
            let binding = Listener::new(question.as_ref(), "click", move |_event| {
                if let Some(panel) = weak.upgrade() {
                    panel.borrow_mut().toggle(idx);
                }
            });
            if let Some(binding) = binding {
                bindings.push(binding);
            }
        }
    }
    panel.borrow_mut()._bindings = bindings;

    Some(panel)
}

impl FaqPanel {
    fn toggle(&mut self, item: usize) {
        self.accordion.toggle(item);
        for (idx, el) in self.items.iter().enumerate() {
            dom::set_class(el, "open", self.accordion.is_open(idx));
        }
    }
}
