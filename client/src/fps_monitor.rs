use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use vitrine_shared::fps::FrameSampler;

/// Samples the animation-frame rate for the page lifetime.
///
/// Every frame callback feeds the sampler its timestamp; an undershooting
/// window latches the process-wide low-FPS cell and logs one diagnostic per
/// low window. The loop reschedules itself each frame and cancels the pending
/// request on drop.
pub struct FpsMonitor {
    inner: Rc<Inner>,
}

struct Inner {
    window: Option<web_sys::Window>,
    raf_id: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FpsMonitor {
    pub fn start(low_fps: Rc<Cell<bool>>) -> Self {
        let window = web_sys::window();
        let origin = window
            .as_ref()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0);

        let inner = Rc::new(Inner {
            window,
            raf_id: Cell::new(None),
            callback: RefCell::new(None),
        });

        let inner_cb = inner.clone();
        let mut sampler = FrameSampler::new(origin);
        let cb = Closure::<dyn FnMut(f64)>::new(move |now: f64| {
            inner_cb.raf_id.set(None);
            if let Some(sample) = sampler.record_frame(now)
                && sample.low
            {
                low_fps.set(true);
                web_sys::console::warn_1(
                    &format!(
                        "Low FPS detected ({} frames/s); animations reduced.",
                        sample.frames
                    )
                    .into(),
                );
            }
            Inner::request_frame(&inner_cb);
        });
        *inner.callback.borrow_mut() = Some(cb);

        Inner::request_frame(&inner);
        Self { inner }
    }
}

impl Inner {
    fn request_frame(inner: &Rc<Inner>) {
        let cb_ref = inner.callback.borrow();
        let (Some(cb), Some(window)) = (cb_ref.as_ref(), inner.window.as_ref()) else {
            return;
        };
        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            inner.raf_id.set(Some(id));
        }
    }
}

impl Drop for FpsMonitor {
    fn drop(&mut self) {
        if let Some(raf_id) = self.inner.raf_id.replace(None)
            && let Some(window) = self.inner.window.as_ref()
        {
            let _ = window.cancel_animation_frame(raf_id);
        }
        // Break the callback->inner reference cycle on teardown.
        self.inner.callback.borrow_mut().take();
    }
}
