// SPDX-License-Identifier: MPL-2.0
//! Drag gesture tracking
//!
//! Records the pointer coordinates of an in-progress swipe so the state
//! machine can compute displacement and commit direction on release.

/// A drag gesture in progress, tracked in viewport-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    start_x: f32,
    current_x: f32,
}

impl DragGesture {
    /// Starts a gesture at pointer coordinate `x`.
    #[must_use]
    pub fn new(start_x: f32) -> Self {
        Self {
            start_x,
            current_x: start_x,
        }
    }

    /// Updates the live pointer coordinate.
    pub fn move_to(&mut self, x: f32) {
        self.current_x = x;
    }

    /// Signed displacement since the gesture began; negative is leftward.
    #[must_use]
    pub fn delta(&self) -> f32 {
        self.current_x - self.start_x
    }
}

/// How a finished drag resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Displacement exceeded the threshold; the active index moved one step.
    Committed,
    /// Displacement stayed within the threshold; the index is unchanged.
    Reverted,
}
