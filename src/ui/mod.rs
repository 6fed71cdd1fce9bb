// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! - [`showcase`] - The page itself: header, sections, decks, footer
//! - [`carousel_view`] - One slide deck with arrows, dots, and drag surface
//! - [`notifications`] - Toast notification system for user feedback
//! - [`widgets`] - Custom Iced widgets (wheel filter)
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod carousel_view;
pub mod design_tokens;
pub mod notifications;
pub mod showcase;
pub mod styles;
pub mod theming;
pub mod widgets;
