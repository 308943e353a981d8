// SPDX-License-Identifier: MPL-2.0
//! Lifecycle of the celebration timer.
//!
//! `Autoplay` only records whether the interval should exist. The app turns
//! that into an `iced::time::every` subscription, so stopping the driver is
//! what cancels the timer: a subscription that is no longer returned from
//! `App::subscription` is dropped by the runtime.

use crate::config::AUTOPLAY_TICK;
use std::time::Duration;

/// Lifecycle of the single celebration timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Autoplay {
    /// Never started.
    #[default]
    Stopped,
    /// Interval active; one candle per tick.
    Running,
    /// Ran to completion or was torn down. Cannot restart.
    Finished,
}

impl Autoplay {
    /// Starts the timer. Returns `false` if a timer already ran or is running,
    /// so at most one interval ever exists.
    pub fn start(&mut self) -> bool {
        match self {
            Autoplay::Stopped => {
                *self = Autoplay::Running;
                true
            }
            Autoplay::Running | Autoplay::Finished => false,
        }
    }

    /// Stops the timer for good. Returns whether it was running.
    pub fn finish(&mut self) -> bool {
        let was_running = self.is_running();
        *self = Autoplay::Finished;
        was_running
    }

    #[must_use]
    pub fn is_running(self) -> bool {
        self == Autoplay::Running
    }

    /// Time between two ticks.
    #[must_use]
    pub fn period(self) -> Duration {
        AUTOPLAY_TICK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_once() {
        let mut autoplay = Autoplay::default();
        assert!(autoplay.start());
        assert!(autoplay.is_running());
        assert!(!autoplay.start());
        assert!(autoplay.is_running());
    }

    #[test]
    fn finished_timer_cannot_restart() {
        let mut autoplay = Autoplay::default();
        autoplay.start();
        assert!(autoplay.finish());
        assert!(!autoplay.is_running());
        assert!(!autoplay.start());
        assert_eq!(autoplay, Autoplay::Finished);
    }

    #[test]
    fn finish_without_start_reports_not_running() {
        let mut autoplay = Autoplay::default();
        assert!(!autoplay.finish());
    }

    #[test]
    fn period_is_half_a_second() {
        assert_eq!(Autoplay::Running.period(), Duration::from_millis(500));
    }
}
