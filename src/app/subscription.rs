// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Every subscription here is derived from state on each update cycle. When
//! a function returns `Subscription::none()`, the runtime drops the
//! corresponding stream, which is how the autoplay interval, the confetti
//! frames and the resize listener are released.

use super::Message;
use crate::celebration::Autoplay;
use iced::{event, time, window, Subscription};

/// Routes window lifecycle events while the viewport observer is attached.
pub fn create_window_subscription(attached: bool) -> Subscription<Message> {
    if !attached {
        return Subscription::none();
    }

    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowOpened(size))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    })
}

/// Creates the celebration interval while autoplay is running.
pub fn create_autoplay_subscription(autoplay: Autoplay) -> Subscription<Message> {
    if autoplay.is_running() {
        time::every(autoplay.period()).map(Message::AutoplayTick)
    } else {
        Subscription::none()
    }
}

/// Drives the confetti animation at the display rate while pieces remain.
pub fn create_confetti_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::ConfettiFrame)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::advanced::subscription::into_recipes;

    fn recipe_count(subscription: Subscription<Message>) -> usize {
        into_recipes(subscription).len()
    }

    #[test]
    fn autoplay_interval_exists_only_while_running() {
        assert_eq!(recipe_count(create_autoplay_subscription(Autoplay::Running)), 1);
        assert_eq!(recipe_count(create_autoplay_subscription(Autoplay::Stopped)), 0);
        assert_eq!(recipe_count(create_autoplay_subscription(Autoplay::Finished)), 0);
    }

    #[test]
    fn window_listener_is_dropped_once_detached() {
        assert_eq!(recipe_count(create_window_subscription(true)), 1);
        assert_eq!(recipe_count(create_window_subscription(false)), 0);
    }

    #[test]
    fn confetti_frames_stop_with_the_animation() {
        assert_eq!(recipe_count(create_confetti_subscription(true)), 1);
        assert_eq!(recipe_count(create_confetti_subscription(false)), 0);
    }
}

