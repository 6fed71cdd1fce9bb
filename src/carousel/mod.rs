// SPDX-License-Identifier: MPL-2.0
//! Carousel state machine.
//!
//! Each carousel owns an active index over a fixed set of slides plus the
//! in-flight drag gesture, and projects itself into a [`TrackRender`] that
//! the view layer turns into widgets and scroll offsets. The machine is
//! deliberately GUI-free: wrap-around, the drag-commit threshold, and the
//! snap-back rule are all testable without a window.

mod drag;
mod motion;
mod render;

pub use drag::{DragGesture, DragOutcome};
pub use motion::TrackMotion;
pub use render::{offset_to_fraction, DotState, TrackRender, Transition, SLIDE_DURATION, SNAP_DURATION};

/// Default drag displacement, in logical pixels, beyond which releasing the
/// pointer commits a slide change. Displacement at or below this snaps back.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 40.0;

/// State machine for one sliding panel.
///
/// The active index is always in `[0, slide_count)`; every navigation path
/// goes through [`Carousel::go_to`], which wraps out-of-range targets around
/// instead of clamping them.
#[derive(Debug, Clone)]
pub struct Carousel {
    slide_count: usize,
    active_index: usize,
    transition: Transition,
    drag: Option<DragGesture>,
}

impl Carousel {
    /// Creates a controller for `slide_count` slides, starting at slide 0.
    ///
    /// Returns `None` when there are no slides to control; a panel without
    /// slides gets no controller at all.
    #[must_use]
    pub fn new(slide_count: usize) -> Option<Self> {
        if slide_count == 0 {
            return None;
        }
        Some(Self {
            slide_count,
            active_index: 0,
            transition: Transition::Slide,
            drag: None,
        })
    }

    /// Returns the number of slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Returns the active slide index.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Returns true while a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Normalizes `index` into `[0, slide_count)` with modular wrap-around
    /// (negative targets wrap to the end, targets past the end wrap to the
    /// start) and makes it the active slide.
    pub fn go_to(&mut self, index: i64) {
        let count = self.slide_count as i64;
        self.active_index = index.rem_euclid(count) as usize;
        self.transition = Transition::Slide;
    }

    /// Advances to the following slide, wrapping at the end.
    pub fn next(&mut self) {
        self.go_to(self.active_index as i64 + 1);
    }

    /// Goes back to the preceding slide, wrapping at the start.
    pub fn prev(&mut self) {
        self.go_to(self.active_index as i64 - 1);
    }

    /// Starts a drag gesture at pointer coordinate `x`, suspending the slide
    /// animation so the track can follow the pointer directly.
    pub fn begin_drag(&mut self, x: f32) {
        self.drag = Some(DragGesture::new(x));
        self.transition = Transition::None;
    }

    /// Updates the live pointer coordinate of an active drag.
    ///
    /// No-op when no drag is in progress.
    pub fn update_drag(&mut self, x: f32) {
        if let Some(drag) = &mut self.drag {
            drag.move_to(x);
        }
    }

    /// Ends the active drag gesture.
    ///
    /// Displacement strictly beyond `threshold` commits exactly one step in
    /// the drag direction (a leftward drag reveals the next slide); anything
    /// else snaps back to the slide that was active when the drag began.
    /// Returns `None` when no drag was in progress.
    pub fn end_drag(&mut self, threshold: f32) -> Option<DragOutcome> {
        let drag = self.drag.take()?;
        let delta = drag.delta();
        if delta.abs() > threshold {
            if delta < 0.0 {
                self.next();
            } else {
                self.prev();
            }
            Some(DragOutcome::Committed)
        } else {
            self.transition = Transition::Snap;
            Some(DragOutcome::Reverted)
        }
    }

    /// Projects the current state into a [`TrackRender`] for a viewport of
    /// `viewport_width` logical pixels.
    ///
    /// The offset is `-(active × 100)` percent, shifted by the in-progress
    /// drag displacement when one is active. The projection is pure; calling
    /// it never changes state.
    #[must_use]
    pub fn render(&self, viewport_width: f32) -> TrackRender {
        let base = -(self.active_index as f32) * 100.0;
        let offset_percent = match &self.drag {
            Some(drag) => {
                let width = viewport_width.max(1.0);
                base + drag.delta() / width * 100.0
            }
            None => base,
        };

        let dots = (0..self.slide_count)
            .map(|idx| DotState {
                label: format!("Go to slide {}", idx + 1),
                is_active: idx == self.active_index,
            })
            .collect();

        TrackRender {
            offset_percent,
            transition: self.transition,
            dots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(slides: usize) -> Carousel {
        Carousel::new(slides).expect("carousel should construct for nonzero slides")
    }

    #[test]
    fn new_with_zero_slides_returns_none() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn new_starts_at_first_slide() {
        let carousel = carousel(3);
        assert_eq!(carousel.active_index(), 0);
        assert_eq!(carousel.slide_count(), 3);
        assert!(!carousel.is_dragging());
    }

    #[test]
    fn go_to_wraps_negative_to_end() {
        let mut carousel = carousel(3);
        carousel.go_to(-1);
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn go_to_wraps_past_end_to_start() {
        let mut carousel = carousel(3);
        carousel.go_to(3);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn go_to_resolves_canonical_representative() {
        // k mod N, taking the non-negative representative, for any integer k
        let mut carousel = carousel(3);

        carousel.go_to(7);
        assert_eq!(carousel.active_index(), 1);

        carousel.go_to(-5);
        assert_eq!(carousel.active_index(), 1);

        carousel.go_to(-3);
        assert_eq!(carousel.active_index(), 0);

        carousel.go_to(i64::from(i32::MAX) + 1);
        assert_eq!(carousel.active_index(), (i64::from(i32::MAX) + 1).rem_euclid(3) as usize);
    }

    #[test]
    fn next_then_prev_returns_to_origin() {
        for start in 0..4 {
            let mut carousel = carousel(4);
            carousel.go_to(start);
            let origin = carousel.active_index();

            carousel.next();
            carousel.prev();
            assert_eq!(carousel.active_index(), origin);

            carousel.prev();
            carousel.next();
            assert_eq!(carousel.active_index(), origin);
        }
    }

    #[test]
    fn prev_from_first_wraps_to_last_and_back() {
        let mut carousel = carousel(3);

        carousel.prev();
        assert_eq!(carousel.active_index(), 2);

        carousel.next();
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn single_slide_navigation_stays_at_zero() {
        let mut carousel = carousel(1);

        carousel.next();
        assert_eq!(carousel.active_index(), 0);

        carousel.prev();
        assert_eq!(carousel.active_index(), 0);

        carousel.go_to(-17);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn drag_at_threshold_reverts() {
        let mut carousel = carousel(3);

        carousel.begin_drag(100.0);
        carousel.update_drag(60.0); // displacement of exactly 40
        let outcome = carousel.end_drag(DEFAULT_DRAG_THRESHOLD);

        assert_eq!(outcome, Some(DragOutcome::Reverted));
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn drag_below_threshold_reverts_with_snap() {
        let mut carousel = carousel(3);
        carousel.go_to(1);

        carousel.begin_drag(200.0);
        carousel.update_drag(230.0);
        let outcome = carousel.end_drag(DEFAULT_DRAG_THRESHOLD);

        assert_eq!(outcome, Some(DragOutcome::Reverted));
        assert_eq!(carousel.active_index(), 1);
        assert_eq!(carousel.render(400.0).transition, Transition::Snap);
    }

    #[test]
    fn drag_left_beyond_threshold_commits_next() {
        let mut carousel = carousel(3);

        carousel.begin_drag(100.0);
        carousel.update_drag(59.0); // displacement of -41
        let outcome = carousel.end_drag(DEFAULT_DRAG_THRESHOLD);

        assert_eq!(outcome, Some(DragOutcome::Committed));
        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn drag_right_beyond_threshold_commits_prev() {
        let mut carousel = carousel(3);

        carousel.begin_drag(100.0);
        carousel.update_drag(150.0);
        let outcome = carousel.end_drag(DEFAULT_DRAG_THRESHOLD);

        assert_eq!(outcome, Some(DragOutcome::Committed));
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn drag_commits_exactly_one_step() {
        // A very long drag still advances a single slide
        let mut carousel = carousel(5);

        carousel.begin_drag(500.0);
        carousel.update_drag(0.0);
        carousel.end_drag(DEFAULT_DRAG_THRESHOLD);

        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn end_drag_without_begin_returns_none() {
        let mut carousel = carousel(3);
        assert_eq!(carousel.end_drag(DEFAULT_DRAG_THRESHOLD), None);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn begin_drag_suspends_transition() {
        let mut carousel = carousel(3);

        carousel.begin_drag(100.0);

        assert!(carousel.is_dragging());
        assert_eq!(carousel.render(400.0).transition, Transition::None);
    }

    #[test]
    fn committed_drag_uses_slide_transition() {
        let mut carousel = carousel(3);

        carousel.begin_drag(100.0);
        carousel.update_drag(0.0);
        carousel.end_drag(DEFAULT_DRAG_THRESHOLD);

        assert_eq!(carousel.render(400.0).transition, Transition::Slide);
    }

    #[test]
    fn render_offset_tracks_active_index() {
        let mut carousel = carousel(4);

        assert_eq!(carousel.render(400.0).offset_percent, 0.0);

        carousel.go_to(2);
        assert_eq!(carousel.render(400.0).offset_percent, -200.0);
    }

    #[test]
    fn render_applies_live_drag_offset() {
        let mut carousel = carousel(3);
        carousel.go_to(1);

        carousel.begin_drag(300.0);
        carousel.update_drag(260.0); // -40 px over a 400 px viewport = -10%

        let render = carousel.render(400.0);
        assert!((render.offset_percent - (-110.0)).abs() < f32::EPSILON);
    }

    #[test]
    fn render_clamps_degenerate_viewport_width() {
        let mut carousel = carousel(2);
        carousel.begin_drag(10.0);
        carousel.update_drag(8.0);

        // A zero-width viewport must not divide by zero
        let render = carousel.render(0.0);
        assert!(render.offset_percent.is_finite());
    }

    #[test]
    fn render_dots_mark_active_slide() {
        let mut carousel = carousel(3);
        carousel.go_to(1);

        let render = carousel.render(400.0);
        let states: Vec<bool> = render.dots.iter().map(|d| d.is_active).collect();

        assert_eq!(states, vec![false, true, false]);
        assert_eq!(render.dots[0].label, "Go to slide 1");
        assert_eq!(render.dots[2].label, "Go to slide 3");
    }

    #[test]
    fn go_to_during_drag_keeps_gesture_alive() {
        // Keyboard navigation mid-drag retargets the base offset; the
        // gesture itself keeps its displacement.
        let mut carousel = carousel(3);

        carousel.begin_drag(100.0);
        carousel.update_drag(90.0);
        carousel.go_to(2);

        assert!(carousel.is_dragging());
        let render = carousel.render(400.0);
        assert!((render.offset_percent - (-202.5)).abs() < 0.001);
    }
}
