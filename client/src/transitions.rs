use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use vitrine_shared::{motion, scroll};

use crate::animate::{self, AnimationHandle, Capabilities, MotionCapability, RevealObserver};
use crate::dom::{self, Listener};
use crate::nav::NavMenu;

const PRELOADER_HIDE_DELAY_MS: u32 = 350;
const INTRO_START_DELAY_MS: u32 = 650;

/// Sequences the page-load reveal and the in-page navigation transitions.
pub struct Transitions {
    document: Document,
    overlay: Option<Element>,
    capabilities: Capabilities,
    low_fps: Rc<Cell<bool>>,
    load_timers: Vec<Timeout>,
    _load_binding: Option<Listener>,
    _link_bindings: Vec<Listener>,
    reveal: Rc<RefCell<Option<RevealObserver>>>,
    in_flight: Rc<RefCell<Option<NavSequence>>>,
}

impl Transitions {
    pub fn init(
        document: &Document,
        capabilities: Capabilities,
        low_fps: Rc<Cell<bool>>,
        nav: Weak<RefCell<NavMenu>>,
    ) -> Rc<RefCell<Transitions>> {
        let transitions = Rc::new(RefCell::new(Transitions {
            document: document.clone(),
            overlay: document.get_element_by_id("pageTransition"),
            capabilities,
            low_fps,
            load_timers: Vec::new(),
            _load_binding: None,
            _link_bindings: Vec::new(),
            reveal: Rc::new(RefCell::new(None)),
            in_flight: Rc::new(RefCell::new(None)),
        }));

        let mut bindings = Vec::new();
        for link in dom::select_all(document, "[data-target]") {
            let weak = Rc::downgrade(&transitions);
            let nav = nav.clone();
            let target = link.clone();
            let binding = Listener::new(target.as_ref(), "click", move |event| {
                event.prevent_default();
                let Some(target_id) = link.get_attribute("data-target") else {
                    return;
                };
                if let Some(this) = weak.upgrade() {
                    this.borrow().navigate_to(&target_id);
                }
                if let Some(nav) = nav.upgrade() {
                    nav.borrow_mut().close_if_open();
                }
            });
            if let Some(binding) = binding {
                bindings.push(binding);
            }
        }
        transitions.borrow_mut()._link_bindings = bindings;

        if document.ready_state() == "complete" {
            transitions.borrow_mut().start_load_sequence();
        } else if let Some(window) = web_sys::window() {
            let weak = Rc::downgrade(&transitions);
            let binding = Listener::new(window.as_ref(), "load", move |_event| {
                if let Some(this) = weak.upgrade() {
                    this.borrow_mut().start_load_sequence();
                }
            });
            transitions.borrow_mut()._load_binding = binding;
        }

        transitions
    }

    /// Load choreography: hide the preloader after a short delay, then
    /// collapse the covering overlay and run the intro.
    fn start_load_sequence(&mut self) {
        if let Some(preloader) = self.document.get_element_by_id("preloader") {
            self.load_timers.push(Timeout::new(PRELOADER_HIDE_DELAY_MS, move || {
                let _ = preloader.class_list().add_1("hidden");
            }));
        }

        let overlay = self.overlay.clone();
        let document = self.document.clone();
        let capabilities = self.capabilities;
        let low_fps = Rc::clone(&self.low_fps);
        let reveal = Rc::clone(&self.reveal);
        self.load_timers.push(Timeout::new(INTRO_START_DELAY_MS, move || {
            if let Some(overlay) = &overlay {
                dom::set_style(overlay, "transform", "scaleX(0)");
            }
            run_intro(&document, capabilities, low_fps.get(), &reveal);
        }));
    }

    /// In-page navigation: compute the section offset and either smooth-scroll
    /// (reduced motion) or run the cover-jump-reveal sequence. A sequence
    /// already in flight is cancelled before the new one starts.
    fn navigate_to(&self, target_id: &str) {
        let Some(target) = self.document.get_element_by_id(target_id) else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };

        let nav_height = dom::select_first(&self.document, ".nav-blur")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| f64::from(el.offset_height()));
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let offset = scroll::target_offset(
            target.get_bounding_client_rect().top(),
            scroll_y,
            nav_height,
        );

        let overlay = match (&self.overlay, self.capabilities.motion) {
            (Some(overlay), MotionCapability::Animated) => overlay.clone(),
            _ => {
                let opts = web_sys::ScrollToOptions::new();
                opts.set_top(offset);
                opts.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&opts);
                return;
            }
        };

        // Dropping the superseded sequence cancels its timers and animations
        // and restores the overlay idle state before the new cover starts.
        let previous = self.in_flight.borrow_mut().take();
        drop(previous);
        let sequence = NavSequence::start(overlay, offset, Rc::clone(&self.in_flight));
        *self.in_flight.borrow_mut() = Some(sequence);
    }
}

fn run_intro(
    document: &Document,
    capabilities: Capabilities,
    low_fps: bool,
    reveal_slot: &Rc<RefCell<Option<RevealObserver>>>,
) {
    let reveal_els = dom::select_all(document, ".reveal");

    if capabilities.motion == MotionCapability::Reduced {
        // Synchronous fallback: reveal-tagged elements become fully visible
        // rather than silently staying wherever the markup left them.
        for el in &reveal_els {
            dom::set_style(el, "opacity", "1");
            dom::set_style(el, "transform", "translateY(0)");
        }
        return;
    }

    if low_fps {
        // Entrance animations are skipped wholesale to conserve frame budget;
        // elements keep their markup-default state.
        return;
    }

    if let Some(logo) = dom::select_first(document, ".logo-circle") {
        let _ = animate::entrance(&logo, &motion::logo_entrance());
    }
    let (spec, stagger) = motion::logo_text_entrance();
    for (i, el) in dom::select_all(document, ".logo-text span").iter().enumerate() {
        let _ = animate::entrance(el, &spec.delayed(stagger.delay_for(i)));
    }
    let (spec, stagger) = motion::nav_link_entrance();
    for (i, el) in dom::select_all(document, ".nav-links a").iter().enumerate() {
        let _ = animate::entrance(el, &spec.delayed(stagger.delay_for(i)));
    }

    if capabilities.scroll_trigger && !reveal_els.is_empty() {
        *reveal_slot.borrow_mut() = RevealObserver::register(&reveal_els);
    }
}

/// One cover-jump-reveal run. Dropping it (normal completion or supersession
/// by a newer click) cancels whatever is still pending and settles the
/// overlay back to its idle retracted state.
struct NavSequence {
    overlay: Element,
    cover: Option<AnimationHandle>,
    retract: Option<AnimationHandle>,
    _jump_timer: Option<Timeout>,
    _finish_timer: Option<Timeout>,
}

impl NavSequence {
    fn start(overlay: Element, offset: f64, slot: Rc<RefCell<Option<NavSequence>>>) -> Self {
        // The overlay intercepts pointer input only while the sequence runs.
        dom::set_style(&overlay, "transform-origin", "left");
        dom::set_style(&overlay, "pointer-events", "auto");
        let cover = animate::animate(
            &overlay,
            &motion::cover_expand_keyframes(),
            &motion::cover_options(),
        );

        let jump_overlay = overlay.clone();
        let jump_slot = Rc::clone(&slot);
        let jump_timer = Timeout::new(motion::COVER_DURATION_MS as u32, move || {
            // Jump while fully covered, then retract toward the right edge.
            if let Some(window) = web_sys::window() {
                let opts = web_sys::ScrollToOptions::new();
                opts.set_top(offset);
                window.scroll_to_with_scroll_to_options(&opts);
            }
            dom::set_style(&jump_overlay, "transform-origin", "right");
            let retract = animate::animate(
                &jump_overlay,
                &motion::cover_retract_keyframes(),
                &motion::cover_options(),
            );
            if let Some(sequence) = jump_slot.borrow_mut().as_mut() {
                sequence.retract = retract;
            }
        });

        let finish_slot = Rc::clone(&slot);
        let finish_timer = Timeout::new((2.0 * motion::COVER_DURATION_MS) as u32, move || {
            finish_slot.borrow_mut().take();
        });

        Self {
            overlay,
            cover,
            retract: None,
            _jump_timer: Some(jump_timer),
            _finish_timer: Some(finish_timer),
        }
    }
}

impl Drop for NavSequence {
    fn drop(&mut self) {
        dom::set_style(&self.overlay, "transform", "scaleX(0)");
        dom::set_style(&self.overlay, "pointer-events", "none");
        if let Some(cover) = self.cover.take() {
            cover.cancel();
        }
        if let Some(retract) = self.retract.take() {
            retract.cancel();
        }
    }
}
