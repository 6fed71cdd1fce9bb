// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module routes native events (keyboard, mouse, window) to top-level
//! messages and owns the shared autoplay timer. There is one timer for the
//! whole window: every carousel advances on the same tick, so side-by-side
//! instances stay in step.

use super::{ArrowKey, Message};
use iced::{event, keyboard, mouse, time, window, Subscription};
use std::time::Duration;

/// Creates the native event subscription.
///
/// Window focus and raw mouse events are forwarded unconditionally: a drag
/// keeps tracking the cursor even while it crosses widgets that capture
/// events. Keyboard events are only forwarded when no widget captured them,
/// so an open language dropdown keeps its own arrow-key handling.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        match &event {
            event::Event::Window(window::Event::Focused) => {
                return Some(Message::WindowFocusChanged(true));
            }
            event::Event::Window(window::Event::Unfocused) => {
                return Some(Message::WindowFocusChanged(false));
            }
            event::Event::Window(window::Event::Resized(size)) => {
                return Some(Message::ViewportResized(size.width));
            }
            event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                return Some(Message::PointerMoved(position.x));
            }
            event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                return Some(Message::PointerReleased);
            }
            event::Event::Mouse(mouse::Event::CursorLeft) => {
                return Some(Message::PointerLeft);
            }
            _ => {}
        }

        if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = &event {
            match status {
                event::Status::Ignored => match key {
                    keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                        Some(Message::ArrowKeyPressed(ArrowKey::Left))
                    }
                    keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                        Some(Message::ArrowKeyPressed(ArrowKey::Right))
                    }
                    keyboard::Key::Named(keyboard::key::Named::F5) => {
                        Some(Message::ReloadTranslations)
                    }
                    _ => None,
                },
                event::Status::Captured => None,
            }
        } else {
            None
        }
    })
}

/// Creates the shared autoplay timer subscription.
///
/// The timer only runs while the window is focused, no drag is in flight,
/// and there is at least one carousel to advance. Dropping the subscription
/// resets the interval, so interaction pauses restart the cadence cleanly.
pub fn create_autoplay_subscription(
    enabled: bool,
    window_focused: bool,
    drag_active: bool,
    carousel_count: usize,
    interval: Duration,
) -> Subscription<Message> {
    if enabled && window_focused && !drag_active && carousel_count > 0 {
        time::every(interval).map(Message::AutoplayTick)
    } else {
        Subscription::none()
    }
}

/// Creates the redraw cadence subscription driving track animations.
///
/// Active only while at least one track motion is in flight; an idle page
/// schedules no wakeups.
pub fn create_animation_subscription(motion_active: bool) -> Subscription<Message> {
    if motion_active {
        time::every(Duration::from_millis(16)).map(Message::AnimationTick)
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
