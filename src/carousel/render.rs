// SPDX-License-Identifier: MPL-2.0
//! Render projection for the carousel track.
//!
//! [`TrackRender`] is the deterministic state-to-presentation output of the
//! state machine: an offset, how to reach it, and the dot indicator row.
//! The view layer consumes it without reaching back into the machine.

use std::time::Duration;

/// Duration of the animated slide to a committed index.
pub const SLIDE_DURATION: Duration = Duration::from_millis(450);

/// Duration of the snap back to the current index after an aborted drag.
pub const SNAP_DURATION: Duration = Duration::from_millis(300);

/// How the track should move to its rendered offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    /// Animated slide to a committed index.
    #[default]
    Slide,
    /// Shorter snap back after a drag that stayed within the threshold.
    Snap,
    /// No animation; the track follows the pointer directly.
    None,
}

impl Transition {
    /// Animation duration, or `None` for immediate pointer tracking.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            Transition::Slide => Some(SLIDE_DURATION),
            Transition::Snap => Some(SNAP_DURATION),
            Transition::None => None,
        }
    }
}

/// One navigation dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotState {
    /// Accessible label, 1-based ("Go to slide 3").
    pub label: String,
    /// True for the dot matching the active slide.
    pub is_active: bool,
}

/// Deterministic projection of a carousel for the view layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRender {
    /// Horizontal track offset as a percentage of viewport width:
    /// `-(active × 100)`, shifted by any in-progress drag displacement.
    pub offset_percent: f32,
    /// How the track should reach that offset.
    pub transition: Transition,
    /// Dot indicator states, one per slide, in slide order.
    pub dots: Vec<DotState>,
}

impl TrackRender {
    /// Scroll position as a fraction of the track's maximum horizontal
    /// offset, clamped to `[0, 1]`. The first slide sits at `0.0`, the last
    /// at `1.0`; a single-slide track never scrolls.
    #[must_use]
    pub fn scroll_fraction(&self) -> f32 {
        offset_to_fraction(self.offset_percent, self.dots.len())
    }
}

/// Maps a track offset in percent space onto the relative scroll fraction
/// of a track holding `slide_count` viewport-wide slides.
///
/// Animated motions sample offsets between slide positions, so this accepts
/// any intermediate value and clamps overshoot into `[0, 1]`.
#[must_use]
pub fn offset_to_fraction(offset_percent: f32, slide_count: usize) -> f32 {
    if slide_count <= 1 {
        return 0.0;
    }
    (-offset_percent / 100.0 / (slide_count - 1) as f32).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(offset_percent: f32, slides: usize) -> TrackRender {
        TrackRender {
            offset_percent,
            transition: Transition::Slide,
            dots: (0..slides)
                .map(|idx| DotState {
                    label: format!("Go to slide {}", idx + 1),
                    is_active: idx == 0,
                })
                .collect(),
        }
    }

    #[test]
    fn scroll_fraction_maps_slide_offsets_onto_unit_range() {
        assert_eq!(render(0.0, 3).scroll_fraction(), 0.0);
        assert_eq!(render(-100.0, 3).scroll_fraction(), 0.5);
        assert_eq!(render(-200.0, 3).scroll_fraction(), 1.0);
    }

    #[test]
    fn scroll_fraction_clamps_drag_overshoot() {
        // Dragging right past the first slide must not scroll negative
        assert_eq!(render(25.0, 3).scroll_fraction(), 0.0);
        // Dragging left past the last slide pins to the end
        assert_eq!(render(-230.0, 3).scroll_fraction(), 1.0);
    }

    #[test]
    fn scroll_fraction_of_single_slide_is_zero() {
        assert_eq!(render(0.0, 1).scroll_fraction(), 0.0);
        assert_eq!(render(-40.0, 1).scroll_fraction(), 0.0);
    }

    #[test]
    fn offset_to_fraction_handles_intermediate_motion_samples() {
        // Halfway through the first transition of a four slide track
        assert_eq!(offset_to_fraction(-50.0, 4), 50.0 / 300.0);
        assert_eq!(offset_to_fraction(-300.0, 4), 1.0);
        assert_eq!(offset_to_fraction(12.0, 4), 0.0);
    }

    #[test]
    fn transition_durations_match_commit_and_snap() {
        assert_eq!(Transition::Slide.duration(), Some(SLIDE_DURATION));
        assert_eq!(Transition::Snap.duration(), Some(SNAP_DURATION));
        assert_eq!(Transition::None.duration(), None);
        assert!(SNAP_DURATION < SLIDE_DURATION);
    }
}
