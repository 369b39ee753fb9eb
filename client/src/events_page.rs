use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

use vitrine_shared::events::{CARD_HIDE_DELAY_MS, CardPhase, CardTransition, EventsBoard, Slide};

use crate::dom::{self, Listener};

/// Events view: year switcher plus per-slide semester filters.
///
/// The board owns the state; this struct owns the matching DOM handles (in
/// the same discovery order, so indices line up) and the pending fade-out
/// timers.
pub struct EventsPage {
    board: EventsBoard,
    year_buttons: Vec<(Element, String)>,
    slides: Vec<SlideDom>,
    _bindings: Vec<Listener>,
}

struct SlideDom {
    root: Element,
    filter_buttons: Vec<Element>,
    cards: Vec<Element>,
    hide_timers: Vec<Option<Timeout>>,
}

pub fn init(document: &Document) -> Option<Rc<RefCell<EventsPage>>> {
    let year_buttons = dom::select_all(document, ".year-btn");
    let slide_els = dom::select_all(document, ".year-slide");
    if year_buttons.is_empty() || slide_els.is_empty() {
        // Not on the events page.
        return None;
    }

    let mut specs = Vec::with_capacity(slide_els.len());
    let mut slides = Vec::with_capacity(slide_els.len());
    for root in slide_els {
        let year = root.get_attribute("data-year").unwrap_or_default();
        let filter_buttons = dom::select_all_within(&root, ".filter-btn");
        let cards = dom::select_all_within(&root, ".event-card-new");
        specs.push(Slide::new(
            year,
            filter_buttons
                .iter()
                .map(|b| b.get_attribute("data-filter").unwrap_or_default())
                .collect(),
            cards.iter().map(|c| c.get_attribute("data-semester")).collect(),
        ));
        let hide_timers = (0..cards.len()).map(|_| None).collect();
        slides.push(SlideDom {
            root,
            filter_buttons,
            cards,
            hide_timers,
        });
    }

    // The pre-marked year button wins, then the first button; a year with no
    // matching slide still resolves to the first slide inside the board.
    let initial_year = year_buttons
        .iter()
        .find(|b| b.class_list().contains("active"))
        .and_then(|b| b.get_attribute("data-year"))
        .or_else(|| year_buttons.first().and_then(|b| b.get_attribute("data-year")));
    let board = EventsBoard::new(specs, initial_year.as_deref())?;

    let year_buttons = year_buttons
        .into_iter()
        .map(|b| {
            let year = b.get_attribute("data-year").unwrap_or_default();
            (b, year)
        })
        .collect();

    let page = Rc::new(RefCell::new(EventsPage {
        board,
        year_buttons,
        slides,
        _bindings: Vec::new(),
    }));

    let mut bindings = Vec::new();
    {
        let page_ref = page.borrow();
        for (button, year) in &page_ref.year_buttons {
            let weak = Rc::downgrade(&page);
            let year = year.clone();
            let binding = Listener::new(button.as_ref(), "click", move |_event| {
                if let Some(page) = weak.upgrade() {
                    page.borrow_mut().show_year(&year);
                }
            });
            if let Some(binding) = binding {
                bindings.push(binding);
            }
        }

        for (slide_idx, slide) in page_ref.slides.iter().enumerate() {
            if slide.filter_buttons.is_empty() || slide.cards.is_empty() {
                continue;
            }
            for (filter_idx, button) in slide.filter_buttons.iter().enumerate() {
                let weak = Rc::downgrade(&page);
                let binding = Listener::new(button.as_ref(), "click", move |_event| {
                    if let Some(page) = weak.upgrade() {
                        apply_filter(&page, slide_idx, filter_idx);
                    }
                });
                if let Some(binding) = binding {
                    bindings.push(binding);
                }
            }
        }
    }
    page.borrow_mut()._bindings = bindings;

    // Initial render goes through the same path as a year switch.
    let initial = page.borrow().board.active_year().to_string();
    page.borrow_mut().show_year(&initial);

    Some(page)
}

fn apply_filter(page: &Rc<RefCell<EventsPage>>, slide_idx: usize, filter_idx: usize) {
    let mut this = page.borrow_mut();
    let transitions = this.board.apply_filter(slide_idx, filter_idx);
    if transitions.is_empty() {
        return;
    }

    if let Some(active_filter) = this.board.slides().get(slide_idx).map(|s| s.active_filter)
        && let Some(slide) = this.slides.get(slide_idx)
    {
        for (i, button) in slide.filter_buttons.iter().enumerate() {
            dom::set_class(button, "active", i == active_filter);
        }
    }

    for (card_idx, transition) in transitions.iter().enumerate() {
        match transition {
            CardTransition::Show => this.show_card(slide_idx, card_idx),
            CardTransition::BeginHide => {
                let Some(slide) = this.slides.get_mut(slide_idx) else {
                    continue;
                };
                let Some(card) = slide.cards.get(card_idx) else {
                    continue;
                };
                dom::set_class(card, "hidden-by-filter", true);
                let weak = Rc::downgrade(page);
                let timer = Timeout::new(CARD_HIDE_DELAY_MS, move || {
                    if let Some(page) = weak.upgrade() {
                        page.borrow_mut().finish_hide(slide_idx, card_idx);
                    }
                });
                if let Some(slot) = slide.hide_timers.get_mut(card_idx) {
                    // Replacing the slot cancels any pending hide for this card.
                    *slot = Some(timer);
                }
            }
            CardTransition::Unchanged => {}
        }
    }
}

impl EventsPage {
    fn show_year(&mut self, year: &str) {
        if !self.board.show_year(year) {
            return;
        }
        let active_idx = self.board.active_index();
        // The arriving slide resets to all-visible; its fade-outs must not
        // complete afterwards.
        for timer in &mut self.slides[active_idx].hide_timers {
            timer.take();
        }
        self.render_year_marks();
        self.render_slide(active_idx);
    }

    fn render_year_marks(&self) {
        let active_idx = self.board.active_index();
        let active_year = self.board.active_year();
        for (slide_idx, slide) in self.slides.iter().enumerate() {
            let active = slide_idx == active_idx;
            dom::set_class(&slide.root, "active", active);
            let _ = slide
                .root
                .set_attribute("aria-hidden", if active { "false" } else { "true" });
        }
        for (button, year) in &self.year_buttons {
            let active = year == active_year;
            dom::set_class(button, "active", active);
            let _ = button.set_attribute("aria-selected", if active { "true" } else { "false" });
        }
    }

    fn render_slide(&self, idx: usize) {
        let (Some(state), Some(slide)) = (self.board.slides().get(idx), self.slides.get(idx))
        else {
            return;
        };
        for (i, button) in slide.filter_buttons.iter().enumerate() {
            dom::set_class(button, "active", i == state.active_filter);
        }
        for (i, card) in slide.cards.iter().enumerate() {
            match state.cards.get(i).map(|c| c.phase) {
                Some(CardPhase::Visible) => {
                    dom::set_class(card, "hidden-by-filter", false);
                    dom::set_style(card, "display", "block");
                }
                Some(CardPhase::FadingOut) => dom::set_class(card, "hidden-by-filter", true),
                Some(CardPhase::Hidden) => {
                    dom::set_class(card, "hidden-by-filter", true);
                    dom::set_style(card, "display", "none");
                }
                None => {}
            }
        }
    }

    fn show_card(&mut self, slide_idx: usize, card_idx: usize) {
        let Some(slide) = self.slides.get_mut(slide_idx) else {
            return;
        };
        if let Some(slot) = slide.hide_timers.get_mut(card_idx) {
            // A pending fade-out must not hide a card we just showed.
            slot.take();
        }
        let Some(card) = slide.cards.get(card_idx) else {
            return;
        };
        dom::set_class(card, "hidden-by-filter", false);
        dom::set_style(card, "display", "block");
    }

    fn finish_hide(&mut self, slide_idx: usize, card_idx: usize) {
        if !self.board.finish_hide(slide_idx, card_idx) {
            // Shown again (or slide reset) while the fade ran.
            return;
        }
        let Some(slide) = self.slides.get_mut(slide_idx) else {
            return;
        };
        if let Some(slot) = slide.hide_timers.get_mut(card_idx) {
            slot.take();
        }
        if let Some(card) = slide.cards.get(card_idx) {
            dom::set_style(card, "display", "none");
        }
    }
}
