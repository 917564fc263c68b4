// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only two native events matter here: files dropped on the window feed the
//! gallery, and close requests trigger the gallery teardown before exit.

use super::Message;
use iced::{event, window, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        _ => None,
    })
}
