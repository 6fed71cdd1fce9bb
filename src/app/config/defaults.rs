// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Autoplay**: Shared slide timer interval and bounds
//! - **Drag**: Pointer drag commit threshold

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Default interval between autoplay steps (in seconds).
pub const DEFAULT_AUTOPLAY_INTERVAL_SECS: u64 = 5;

/// Minimum autoplay interval (in seconds).
pub const MIN_AUTOPLAY_INTERVAL_SECS: u64 = 1;

/// Maximum autoplay interval (in seconds).
pub const MAX_AUTOPLAY_INTERVAL_SECS: u64 = 120;

// ==========================================================================
// Drag Defaults
// ==========================================================================

/// Default pointer displacement (logical pixels) beyond which releasing a
/// drag commits a slide change. Mirrors the carousel state machine default.
pub const DEFAULT_DRAG_COMMIT_THRESHOLD: f32 = crate::carousel::DEFAULT_DRAG_THRESHOLD;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Autoplay validation
    assert!(MIN_AUTOPLAY_INTERVAL_SECS > 0);
    assert!(MAX_AUTOPLAY_INTERVAL_SECS >= MIN_AUTOPLAY_INTERVAL_SECS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_SECS >= MIN_AUTOPLAY_INTERVAL_SECS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_SECS <= MAX_AUTOPLAY_INTERVAL_SECS);

    // Drag validation
    assert!(DEFAULT_DRAG_COMMIT_THRESHOLD > 0.0);
};
