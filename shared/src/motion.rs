use serde::Serialize;

/// Overlay cover/retract duration for the in-page navigation transition.
pub const COVER_DURATION_MS: f64 = 350.0;

/// CSS timing functions for the handful of curves the site uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    QuadOut,
    CubicOut,
    QuadInOut,
}

impl Ease {
    pub fn css(self) -> &'static str {
        match self {
            Ease::QuadOut => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Ease::CubicOut => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Ease::QuadInOut => "cubic-bezier(0.455, 0.03, 0.515, 0.955)",
        }
    }
}

/// One keyframe as handed to the Web Animations API.
#[derive(Debug, Clone, Serialize)]
pub struct Keyframe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    pub transform: String,
}

/// Timing block for a single animation, in the shape `Element.animate`
/// expects for its options argument.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackOptions {
    pub duration: f64,
    pub delay: f64,
    pub easing: String,
    pub fill: String,
}

/// An element entrance: slide in from a vertical offset while fading in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceSpec {
    pub dy_px: f64,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub ease: Ease,
}

impl EntranceSpec {
    pub fn delayed(mut self, extra_ms: f64) -> Self {
        self.delay_ms += extra_ms;
        self
    }

    pub fn keyframes(&self) -> [Keyframe; 2] {
        [
            Keyframe {
                opacity: Some(0.0),
                transform: format!("translateY({}px)", self.dy_px),
            },
            Keyframe {
                opacity: Some(1.0),
                transform: "translateY(0px)".to_string(),
            },
        ]
    }

    /// `fill: backwards` holds the offset start state through the delay, so
    /// staggered elements don't flash visible before their turn.
    pub fn options(&self) -> PlaybackOptions {
        PlaybackOptions {
            duration: self.duration_ms,
            delay: self.delay_ms,
            easing: self.ease.css().to_string(),
            fill: "backwards".to_string(),
        }
    }
}

/// Staggered group timing: element `i` starts at `base + i * step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub base_delay_ms: f64,
    pub step_ms: f64,
}

impl Stagger {
    pub fn delay_for(&self, index: usize) -> f64 {
        self.base_delay_ms + self.step_ms * index as f64
    }
}

pub fn logo_entrance() -> EntranceSpec {
    EntranceSpec {
        dy_px: -20.0,
        duration_ms: 500.0,
        delay_ms: 0.0,
        ease: Ease::QuadOut,
    }
}

pub fn logo_text_entrance() -> (EntranceSpec, Stagger) {
    (
        EntranceSpec {
            dy_px: -12.0,
            duration_ms: 400.0,
            delay_ms: 0.0,
            ease: Ease::QuadOut,
        },
        Stagger {
            base_delay_ms: 100.0,
            step_ms: 100.0,
        },
    )
}

pub fn nav_link_entrance() -> (EntranceSpec, Stagger) {
    (
        EntranceSpec {
            dy_px: -10.0,
            duration_ms: 350.0,
            delay_ms: 0.0,
            ease: Ease::QuadOut,
        },
        Stagger {
            base_delay_ms: 200.0,
            step_ms: 60.0,
        },
    )
}

pub fn reveal_entrance() -> EntranceSpec {
    EntranceSpec {
        dy_px: 22.0,
        duration_ms: 600.0,
        delay_ms: 0.0,
        ease: Ease::CubicOut,
    }
}

pub fn cover_expand_keyframes() -> [Keyframe; 2] {
    [
        Keyframe {
            opacity: None,
            transform: "scaleX(0)".to_string(),
        },
        Keyframe {
            opacity: None,
            transform: "scaleX(1)".to_string(),
        },
    ]
}

pub fn cover_retract_keyframes() -> [Keyframe; 2] {
    [
        Keyframe {
            opacity: None,
            transform: "scaleX(1)".to_string(),
        },
        Keyframe {
            opacity: None,
            transform: "scaleX(0)".to_string(),
        },
    ]
}

/// `fill: forwards` keeps the overlay at its end state until the next phase
/// takes over (or the sequence is cancelled and resets it explicitly).
pub fn cover_options() -> PlaybackOptions {
    PlaybackOptions {
        duration: COVER_DURATION_MS,
        delay: 0.0,
        easing: Ease::QuadInOut.css().to_string(),
        fill: "forwards".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{cover_expand_keyframes, logo_text_entrance, nav_link_entrance, reveal_entrance};

    #[test]
    fn stagger_delays_are_arithmetic() {
        let (_, stagger) = nav_link_entrance();
        assert_eq!(stagger.delay_for(0), 200.0);
        assert_eq!(stagger.delay_for(1), 260.0);
        assert_eq!(stagger.delay_for(5), 500.0);

        let (_, stagger) = logo_text_entrance();
        assert_eq!(stagger.delay_for(3), 400.0);
    }

    #[test]
    fn delayed_adds_on_top_of_the_base_delay() {
        let (spec, stagger) = nav_link_entrance();
        let third = spec.delayed(stagger.delay_for(2));
        assert_eq!(third.delay_ms, 320.0);
        assert_eq!(third.duration_ms, spec.duration_ms);
    }

    #[test]
    fn entrance_keyframes_travel_to_rest() {
        let spec = reveal_entrance();
        let [from, to] = spec.keyframes();
        assert_eq!(from.transform, "translateY(22px)");
        assert_eq!(from.opacity, Some(0.0));
        assert_eq!(to.transform, "translateY(0px)");
        assert_eq!(to.opacity, Some(1.0));
    }

    #[test]
    fn entrance_options_serialize_in_waapi_shape() {
        let json = serde_json::to_value(reveal_entrance().options()).expect("serializable");
        assert_eq!(json["duration"], 600.0);
        assert_eq!(json["fill"], "backwards");
        assert_eq!(json["easing"], "cubic-bezier(0.215, 0.61, 0.355, 1)");
    }

    #[test]
    fn cover_keyframes_omit_opacity() {
        let json = serde_json::to_value(cover_expand_keyframes()).expect("serializable");
        assert!(json[0].get("opacity").is_none());
        assert_eq!(json[0]["transform"], "scaleX(0)");
        assert_eq!(json[1]["transform"], "scaleX(1)");
    }
}
