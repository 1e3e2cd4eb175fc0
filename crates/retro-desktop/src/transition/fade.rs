//! Per-window fade transition

use super::ease_in_out;

/// Duration of window fade transitions in milliseconds
pub const FADE_DURATION_MS: f64 = 180.0;

/// Direction of a window fade
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeDirection {
    /// Window appearing
    In,
    /// Window disappearing
    Out,
}

/// Fade transition state for one window
#[derive(Clone, Copy, Debug)]
pub struct Fade {
    /// Start time (ms timestamp)
    pub start_ms: f64,
    /// Direction of the fade
    pub direction: FadeDirection,
}

impl Fade {
    /// Start a fade-in
    pub fn fade_in(start_ms: f64) -> Self {
        Self {
            start_ms,
            direction: FadeDirection::In,
        }
    }

    /// Start a fade-out
    pub fn fade_out(start_ms: f64) -> Self {
        Self {
            start_ms,
            direction: FadeDirection::Out,
        }
    }

    /// Get the progress (0.0 to 1.0)
    pub fn progress(&self, now_ms: f64) -> f32 {
        let elapsed = (now_ms - self.start_ms) as f32;
        (elapsed / FADE_DURATION_MS as f32).clamp(0.0, 1.0)
    }

    /// Check if the fade is complete
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Window opacity at a point in time
    pub fn opacity(&self, now_ms: f64) -> f32 {
        let t = ease_in_out(self.progress(now_ms));
        match self.direction {
            FadeDirection::In => t,
            FadeDirection::Out => 1.0 - t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_in_opacity_rises() {
        let fade = Fade::fade_in(1000.0);
        assert!((fade.opacity(1000.0) - 0.0).abs() < 0.001);
        assert!((fade.opacity(1000.0 + FADE_DURATION_MS) - 1.0).abs() < 0.001);
        assert!(fade.opacity(1090.0) > 0.0);
        assert!(fade.opacity(1090.0) < 1.0);
    }

    #[test]
    fn test_fade_out_opacity_falls() {
        let fade = Fade::fade_out(1000.0);
        assert!((fade.opacity(1000.0) - 1.0).abs() < 0.001);
        assert!((fade.opacity(1000.0 + FADE_DURATION_MS) - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_fade_completion() {
        let fade = Fade::fade_in(1000.0);
        assert!(!fade.is_complete(1000.0));
        assert!(!fade.is_complete(1100.0));
        assert!(fade.is_complete(1000.0 + FADE_DURATION_MS));
    }

    #[test]
    fn test_fade_progress_clamps() {
        let fade = Fade::fade_in(1000.0);
        // Before the start and far past the end stay in range
        assert!((fade.progress(0.0) - 0.0).abs() < 0.001);
        assert!((fade.progress(10_000.0) - 1.0).abs() < 0.001);
    }
}
