use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_sys::Document;

use crate::animate;
use crate::events_page::{self, EventsPage};
use crate::faq::{self, FaqPanel};
use crate::form::{self, ContactForm};
use crate::fps_monitor::FpsMonitor;
use crate::lightbox::{self, Lightbox};
use crate::nav::NavMenu;
use crate::transitions::Transitions;

/// Everything the page runtime keeps alive. Dropping it detaches every
/// listener, observer, and timer the runtime registered.
pub struct App {
    _fps: FpsMonitor,
    _nav: Rc<RefCell<NavMenu>>,
    _transitions: Rc<RefCell<Transitions>>,
    _events: Option<Rc<RefCell<EventsPage>>>,
    _lightbox: Option<Lightbox>,
    _faq: Option<Rc<RefCell<FaqPanel>>>,
    _form: ContactForm,
}

pub fn boot(document: &Document) -> App {
    // The low-FPS flag is owned here and handed out: the frame monitor is its
    // only writer, the transition orchestrator its only reader.
    let low_fps = Rc::new(Cell::new(false));
    let fps = FpsMonitor::start(Rc::clone(&low_fps));

    // Optional animation surfaces are probed once; everything downstream
    // reads the held strategy instead of re-detecting per call.
    let capabilities = animate::detect(document);

    let nav = NavMenu::init(document);
    let transitions = Transitions::init(document, capabilities, low_fps, Rc::downgrade(&nav));

    App {
        _fps: fps,
        _nav: nav,
        _transitions: transitions,
        _events: events_page::init(document),
        _lightbox: lightbox::init(document),
        _faq: faq::init(document),
        _form: form::init(document),
    }
}
