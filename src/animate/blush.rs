//! Click-triggered blush state.
//!
//! A click on the cat's head arms the blush for a fixed hold window; the
//! window restarts on every further click. Rather than a cancellable host
//! timer, the state keeps the monotonic timestamp of the last click and
//! compares it against the current time each frame. The rendered intensity
//! is an exponentially-smoothed scalar chasing the armed/disarmed boolean.

use crate::animate::motion::{lerp_toward, smoothing_factor};

/// How long a single click keeps the blush armed, in seconds.
pub const BLUSH_HOLD_SECS: f32 = 2.0;

/// Smoothing rate of the intensity scalar, per second.
pub const BLUSH_RATE: f32 = 6.0;

#[derive(Clone, Debug, Default)]
pub struct Blush {
    last_click: Option<f32>,
    level: f32,
}

impl Blush {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a head click at time `now`. Re-arms the hold window.
    pub fn trigger(&mut self, now: f32) {
        self.last_click = Some(now);
    }

    /// Whether the hold window is still open at time `now`.
    pub fn armed(&self, now: f32) -> bool {
        match self.last_click {
            Some(at) => now - at < BLUSH_HOLD_SECS,
            None => false,
        }
    }

    /// Advance the smoothed intensity and return it, in `[0, 1]`.
    pub fn update(&mut self, now: f32, dt: f32) -> f32 {
        let target = if self.armed(now) { 1.0 } else { 0.0 };
        self.level = lerp_toward(self.level, target, smoothing_factor(BLUSH_RATE, dt));
        self.level
    }

    pub fn level(&self) -> f32 {
        self.level
    }
}
