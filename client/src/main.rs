mod animate;
mod app;
mod dom;
mod events_page;
mod faq;
mod form;
mod fps_monitor;
mod lightbox;
mod nav;
mod transitions;

use std::cell::RefCell;

thread_local! {
    static APP_HANDLE: RefCell<Option<app::App>> = const { RefCell::new(None) };
}

fn main() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    APP_HANDLE.with(move |slot| {
        // If main() is re-entered (dev/hot-reload runtime quirks), drop the old
        // runtime first so stale listeners and timers can't keep mutating the
        // page alongside the new ones.
        let _old = slot.borrow_mut().take();
        *slot.borrow_mut() = Some(app::boot(&document));
    });
}
