/// Viewport width above which the mobile menu is forced closed.
pub const MOBILE_BREAKPOINT_PX: f64 = 800.0;

/// Glyph shown on the nav toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleGlyph {
    Menu,
    Close,
}

/// What the nav DOM should look like for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRender {
    pub menu_visible: bool,
    pub glyph: ToggleGlyph,
}

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> NavRender {
        self.open = !self.open;
        self.render()
    }

    /// Corrective sync on viewport resize: past the breakpoint the menu is
    /// forced closed regardless of prior state. Returns the render to apply,
    /// or `None` below the breakpoint.
    pub fn sync_width(&mut self, width_px: f64) -> Option<NavRender> {
        if width_px <= MOBILE_BREAKPOINT_PX {
            return None;
        }
        self.open = false;
        Some(self.render())
    }

    pub fn render(&self) -> NavRender {
        NavRender {
            menu_visible: self.open,
            glyph: if self.open {
                ToggleGlyph::Close
            } else {
                ToggleGlyph::Menu
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NavState, ToggleGlyph};

    #[test]
    fn toggle_twice_restores_original_render() {
        let mut nav = NavState::default();
        let initial = nav.render();

        let opened = nav.toggle();
        assert!(opened.menu_visible);
        assert_eq!(opened.glyph, ToggleGlyph::Close);

        let closed = nav.toggle();
        assert_eq!(closed, initial);
        assert!(!nav.is_open());
    }

    #[test]
    fn resize_past_breakpoint_forces_closed() {
        let mut nav = NavState::default();
        nav.toggle();
        assert!(nav.is_open());

        let render = nav.sync_width(1024.0).expect("sync should apply");
        assert!(!render.menu_visible);
        assert_eq!(render.glyph, ToggleGlyph::Menu);
        assert!(!nav.is_open());
    }

    #[test]
    fn resize_past_breakpoint_applies_even_when_already_closed() {
        let mut nav = NavState::default();
        assert!(nav.sync_width(801.0).is_some());
        assert!(!nav.is_open());
    }

    #[test]
    fn resize_at_or_below_breakpoint_is_a_no_op() {
        let mut nav = NavState::default();
        nav.toggle();
        assert!(nav.sync_width(800.0).is_none());
        assert!(nav.sync_width(480.0).is_none());
        assert!(nav.is_open(), "narrow resize must not close the menu");
    }
}
