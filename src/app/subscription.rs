// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only native events the page cares about are keyboard presses for the
//! lightbox, and those must be listened to exactly while the overlay is
//! open. Gating the subscription on the lightbox state gives the
//! acquire-on-open/release-on-any-exit discipline for free: Iced rebuilds
//! subscriptions from state every frame, so closing the overlay (button,
//! Escape, backdrop, or teardown) always detaches the listener.

use super::Message;
use crate::ui::lightbox;
use iced::{event, Subscription};

/// Creates the keyboard event subscription while the lightbox is open.
///
/// Keyboard events already captured by a focused widget are not forwarded.
pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if lightbox_open {
        event::listen_with(|event, status, _window| {
            if let event::Event::Keyboard(..) = &event {
                match status {
                    event::Status::Ignored => {
                        Some(Message::Lightbox(lightbox::Message::RawEvent(event)))
                    }
                    event::Status::Captured => None,
                }
            } else {
                None
            }
        })
    } else {
        Subscription::none()
    }
}
