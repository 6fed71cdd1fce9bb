// SPDX-License-Identifier: MPL-2.0
//! Eased track motion.
//!
//! [`TrackMotion`] interpolates the track between two offsets over a fixed
//! duration. The update loop starts one when a slide commits or a drag snaps
//! back, advances it on redraw ticks, and drops it once it parks at the
//! target offset.

use std::time::{Duration, Instant};

/// An in-flight animated move of the track, in offset-percent space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMotion {
    from_percent: f32,
    to_percent: f32,
    started_at: Instant,
    duration: Duration,
}

impl TrackMotion {
    /// Starts a motion from `from_percent` to `to_percent` at `started_at`.
    #[must_use]
    pub fn new(from_percent: f32, to_percent: f32, duration: Duration, started_at: Instant) -> Self {
        Self {
            from_percent,
            to_percent,
            started_at,
            duration,
        }
    }

    /// The offset the motion is heading to.
    #[must_use]
    pub fn target_percent(&self) -> f32 {
        self.to_percent
    }

    /// Offset at `now`, eased with a smoothstep curve.
    #[must_use]
    pub fn offset_at(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        let eased = progress * progress * (3.0 - 2.0 * progress);
        self.from_percent + (self.to_percent - self.from_percent) * eased
    }

    /// True once the motion has reached its target.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}
