/// Rolling one-second frame counter behind the low-FPS downgrade.
///
/// The sampler never reads a clock: every animation-frame callback feeds its
/// own high-resolution timestamp in, so the accounting is testable with
/// synthetic frame sequences.
#[derive(Debug, Clone)]
pub struct FrameSampler {
    window_start: f64,
    frames: u32,
    low_fps: bool,
}

const SAMPLE_WINDOW_MS: f64 = 1000.0;

/// Windows that close with fewer frames than this latch low-FPS mode.
pub const MIN_FRAMES_PER_WINDOW: u32 = 40;

/// Result of a closed sample window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSample {
    pub frames: u32,
    pub low: bool,
}

impl FrameSampler {
    pub fn new(start_ms: f64) -> Self {
        Self {
            window_start: start_ms,
            frames: 0,
            low_fps: false,
        }
    }

    /// Record one animation frame at `now_ms`.
    ///
    /// Returns the closed window's sample once more than a second has elapsed
    /// since the window opened; the counter and window origin reset either way.
    /// The frame that closes a window is counted toward it.
    pub fn record_frame(&mut self, now_ms: f64) -> Option<WindowSample> {
        self.frames += 1;
        if now_ms <= self.window_start + SAMPLE_WINDOW_MS {
            return None;
        }

        let sample = WindowSample {
            frames: self.frames,
            low: self.frames < MIN_FRAMES_PER_WINDOW,
        };
        if sample.low {
            self.low_fps = true;
        }
        self.frames = 0;
        self.window_start = now_ms;
        Some(sample)
    }

    /// Latched by the first undershooting window; never clears for the page
    /// lifetime.
    pub fn low_fps(&self) -> bool {
        self.low_fps
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameSampler, MIN_FRAMES_PER_WINDOW, WindowSample};

    fn run_window(sampler: &mut FrameSampler, start_ms: f64, frames: u32) -> Option<WindowSample> {
        // Spread `frames - 1` frames inside the window, then close it just past
        // the 1000ms boundary.
        for i in 1..frames {
            assert!(
                sampler.record_frame(start_ms + i as f64).is_none(),
                "window closed early"
            );
        }
        sampler.record_frame(start_ms + 1001.0)
    }

    #[test]
    fn undershooting_window_latches_low_fps() {
        let mut sampler = FrameSampler::new(0.0);
        let sample = run_window(&mut sampler, 0.0, 10).expect("window should close");
        assert_eq!(sample.frames, 10);
        assert!(sample.low);
        assert!(sampler.low_fps());
    }

    #[test]
    fn threshold_window_is_not_low() {
        let mut sampler = FrameSampler::new(0.0);
        let sample = run_window(&mut sampler, 0.0, MIN_FRAMES_PER_WINDOW).expect("window should close");
        assert_eq!(sample.frames, MIN_FRAMES_PER_WINDOW);
        assert!(!sample.low);
        assert!(!sampler.low_fps());
    }

    #[test]
    fn low_fps_survives_a_later_healthy_window() {
        let mut sampler = FrameSampler::new(0.0);
        run_window(&mut sampler, 0.0, 10);
        assert!(sampler.low_fps());

        let sample = run_window(&mut sampler, 1001.0, 60).expect("window should close");
        assert!(!sample.low);
        assert!(sampler.low_fps(), "flag is monotonic for the page lifetime");
    }

    #[test]
    fn window_boundary_is_exclusive() {
        let mut sampler = FrameSampler::new(0.0);
        assert!(sampler.record_frame(1000.0).is_none());
        assert!(sampler.record_frame(1000.5).is_some());
    }

    #[test]
    fn counter_resets_between_windows() {
        let mut sampler = FrameSampler::new(0.0);
        let first = run_window(&mut sampler, 0.0, 50).expect("window should close");
        assert_eq!(first.frames, 50);

        let second = run_window(&mut sampler, 1001.0, 45).expect("window should close");
        assert_eq!(second.frames, 45, "count must not carry across windows");
    }
}
