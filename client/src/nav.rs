use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use vitrine_shared::nav::{NavRender, NavState, ToggleGlyph};

use crate::dom::{self, Listener};

const MENU_ICON_HTML: &str = r#"<i class="ri-menu-line"></i>"#;
const CLOSE_ICON_HTML: &str = r#"<i class="ri-close-line"></i>"#;

/// Mobile navigation menu: click toggle plus forced close on wide viewports.
pub struct NavMenu {
    state: NavState,
    toggle_el: Option<Element>,
    menu_el: Option<Element>,
    _bindings: Vec<Listener>,
}

impl NavMenu {
    pub fn init(document: &Document) -> Rc<RefCell<NavMenu>> {
        let nav = Rc::new(RefCell::new(NavMenu {
            state: NavState::default(),
            toggle_el: document.get_element_by_id("navToggle"),
            menu_el: document.get_element_by_id("navMobile"),
            _bindings: Vec::new(),
        }));

        let mut bindings = Vec::new();
        let toggle_el = nav.borrow().toggle_el.clone();
        if let Some(toggle_el) = toggle_el {
            let weak = Rc::downgrade(&nav);
            let binding = Listener::new(toggle_el.as_ref(), "click", move |_event| {
                if let Some(nav) = weak.upgrade() {
                    nav.borrow_mut().toggle();
                }
            });
            if let Some(binding) = binding {
                bindings.push(binding);
            }
        }

        if let Some(window) = web_sys::window() {
            let weak = Rc::downgrade(&nav);
            let binding = Listener::new(window.as_ref(), "resize", move |_event| {
                let Some(nav) = weak.upgrade() else {
                    return;
                };
                let Some(window) = web_sys::window() else {
                    return;
                };
                let Some(width) = window.inner_width().ok().and_then(|w| w.as_f64()) else {
                    return;
                };
                nav.borrow_mut().sync_width(width);
            });
            if let Some(binding) = binding {
                bindings.push(binding);
            }
        }

        nav.borrow_mut()._bindings = bindings;
        nav
    }

    /// No-ops unless both the toggle control and the menu exist.
    pub fn toggle(&mut self) {
        if self.toggle_el.is_none() || self.menu_el.is_none() {
            return;
        }
        let render = self.state.toggle();
        self.apply(render);
    }

    /// Closing side effect for in-page navigation clicks.
    pub fn close_if_open(&mut self) {
        if self.state.is_open() {
            self.toggle();
        }
    }

    pub fn sync_width(&mut self, width_px: f64) {
        if let Some(render) = self.state.sync_width(width_px) {
            self.apply(render);
        }
    }

    fn apply(&self, render: NavRender) {
        if let Some(menu) = &self.menu_el {
            dom::set_style(menu, "display", if render.menu_visible { "flex" } else { "none" });
        }
        if let Some(toggle) = &self.toggle_el {
            toggle.set_inner_html(match render.glyph {
                ToggleGlyph::Menu => MENU_ICON_HTML,
                ToggleGlyph::Close => CLOSE_ICON_HTML,
            });
        }
    }
}
