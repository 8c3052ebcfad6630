// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, mouse, time, Subscription};
use std::time::Duration;

/// Routes native events to the update loop.
///
/// Wheel scroll always reaches the viewer so zooming wins over any
/// scrollable content; everything else is routed only when no widget
/// captured it.
pub(super) fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        if matches!(
            event,
            event::Event::Mouse(mouse::Event::WheelScrolled { .. })
        ) {
            return Some(Message::RawEvent(event));
        }

        match status {
            event::Status::Ignored => Some(Message::RawEvent(event)),
            event::Status::Captured => None,
        }
    })
}

/// Creates a periodic tick subscription driving the slideshow, or no
/// subscription at all while the slideshow is inactive.
pub(super) fn create_slideshow_subscription(
    enabled: bool,
    interval: Duration,
) -> Subscription<Message> {
    if enabled {
        time::every(interval).map(Message::SlideshowTick)
    } else {
        Subscription::none()
    }
}
