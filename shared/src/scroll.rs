/// Nav bar height assumed when the blur bar is absent.
pub const DEFAULT_NAV_HEIGHT_PX: f64 = 72.0;

/// Breathing room kept between the nav bar and a scrolled-to section.
pub const SCROLL_GAP_PX: f64 = 10.0;

/// Fraction of the viewport height at which a reveal element triggers its
/// entrance.
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.85;

/// Document-space scroll target for an in-page navigation jump: the section
/// top, less the nav bar and a fixed gap.
pub fn target_offset(target_top: f64, scroll_y: f64, nav_height: Option<f64>) -> f64 {
    target_top + scroll_y - nav_height.unwrap_or(DEFAULT_NAV_HEIGHT_PX) - SCROLL_GAP_PX
}

/// Bottom root margin (percent, negative) that makes an intersection observer
/// fire when an element's top crosses the reveal fraction of the viewport.
pub fn reveal_root_margin_percent() -> f64 {
    -(1.0 - REVEAL_VIEWPORT_FRACTION) * 100.0
}

#[cfg(test)]
mod tests {
    use super::{reveal_root_margin_percent, target_offset};

    #[test]
    fn offset_subtracts_measured_nav_and_gap() {
        assert_eq!(target_offset(100.0, 250.0, Some(64.0)), 276.0);
    }

    #[test]
    fn offset_uses_fallback_nav_height_when_unmeasured() {
        assert_eq!(target_offset(100.0, 250.0, None), 268.0);
    }

    #[test]
    fn offset_can_be_negative_near_the_document_top() {
        assert!(target_offset(20.0, 0.0, None) < 0.0);
    }

    #[test]
    fn root_margin_matches_the_reveal_fraction() {
        assert!((reveal_root_margin_percent() + 15.0).abs() < 1e-9);
    }
}
