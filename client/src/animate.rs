use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use vitrine_shared::motion::{self, EntranceSpec, Keyframe, PlaybackOptions};
use vitrine_shared::scroll;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionCapability {
    /// Element-level Web Animations are available.
    Animated,
    /// No animation surface: final states are applied synchronously and
    /// navigation falls back to native smooth scrolling.
    Reduced,
}

#[derive(Debug, Clone, Copy)]
pub struct Capabilities {
    pub motion: MotionCapability,
    pub scroll_trigger: bool,
}

/// Probe the optional animation surfaces once at startup. Later decisions
/// read the held strategy instead of re-detecting per call.
pub fn detect(document: &Document) -> Capabilities {
    let animated = document.create_element("div").ok().is_some_and(|probe| {
        js_sys::Reflect::has(probe.as_ref(), &JsValue::from_str("animate")).unwrap_or(false)
    });
    let scroll_trigger = web_sys::window().is_some_and(|window| {
        js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false)
    });
    Capabilities {
        motion: if animated {
            MotionCapability::Animated
        } else {
            MotionCapability::Reduced
        },
        scroll_trigger,
    }
}

/// A started animation. Dropping the handle leaves the animation running;
/// `cancel` stops it and releases its fill.
pub struct AnimationHandle(JsValue);

impl AnimationHandle {
    pub fn cancel(&self) {
        let Ok(cancel) = js_sys::Reflect::get(&self.0, &JsValue::from_str("cancel")) else {
            return;
        };
        let Ok(cancel) = cancel.dyn_into::<js_sys::Function>() else {
            return;
        };
        let _ = cancel.call0(&self.0);
    }
}

/// Run `Element.animate` with the given keyframes and timing. Returns `None`
/// when the surface is missing or rejects the input, so callers degrade the
/// same way as any other absent capability.
pub fn animate(
    el: &Element,
    keyframes: &[Keyframe],
    options: &PlaybackOptions,
) -> Option<AnimationHandle> {
    let animate_fn = js_sys::Reflect::get(el.as_ref(), &JsValue::from_str("animate")).ok()?;
    let animate_fn = animate_fn.dyn_into::<js_sys::Function>().ok()?;
    let keyframes = serde_wasm_bindgen::to_value(keyframes).ok()?;
    let options = serde_wasm_bindgen::to_value(options).ok()?;
    let animation = animate_fn.call2(el.as_ref(), &keyframes, &options).ok()?;
    Some(AnimationHandle(animation))
}

pub fn entrance(el: &Element, spec: &EntranceSpec) -> Option<AnimationHandle> {
    animate(el, &spec.keyframes(), &spec.options())
}

/// One-shot entrance animations for reveal-tagged elements as they scroll
/// into the upper reveal fraction of the viewport.
pub struct RevealObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl RevealObserver {
    pub fn register(elements: &[Element]) -> Option<Self> {
        let spec = motion::reveal_entrance();
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    let _ = entrance(&target, &spec);
                }
            },
        );

        let margin = format!("0px 0px {:.0}% 0px", scroll::reveal_root_margin_percent());
        let init = web_sys::IntersectionObserverInit::new();
        init.set_root_margin(&margin);
        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )
        .ok()?;
        for el in elements {
            observer.observe(el);
        }
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
