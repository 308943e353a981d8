// SPDX-License-Identifier: MPL-2.0
//! Card state and its transitions.
//!
//! Every change goes through [`CelebrationState::apply`] (or the pure
//! [`transition`] wrapper). Whether confetti is shown is derived from the
//! counters and the celebrating flag on demand, never stored.

use super::autoplay::Autoplay;
use super::progress::Progress;
use crate::config::{TOTAL_BALLOONS, TOTAL_CANDLES};

/// Something that can happen to the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A candle was clicked.
    LightCandle(usize),
    /// A balloon was clicked.
    PopBalloon(usize),
    /// The celebrate control was pressed.
    Celebrate,
    /// The autoplay interval fired.
    AutoplayTick,
    /// The card is going away; release the timer.
    Teardown,
}

/// Coarse stage of the card, derived from its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    InProgress,
    AutoCelebrating,
    Complete,
}

/// What a single event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Outcome {
    /// A counter or flag changed.
    pub changed: bool,
    /// Confetti went from hidden to shown on this event.
    pub confetti_raised: bool,
    pub autoplay_started: bool,
    pub autoplay_stopped: bool,
}

/// All state of one greeting card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CelebrationState {
    candles: Progress,
    balloons: Progress,
    celebrating: bool,
    autoplay: Autoplay,
}

impl Default for CelebrationState {
    fn default() -> Self {
        Self::new()
    }
}

impl CelebrationState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            candles: Progress::new(TOTAL_CANDLES),
            balloons: Progress::new(TOTAL_BALLOONS),
            celebrating: false,
            autoplay: Autoplay::Stopped,
        }
    }

    #[must_use]
    pub fn candles(&self) -> Progress {
        self.candles
    }

    #[must_use]
    pub fn balloons(&self) -> Progress {
        self.balloons
    }

    /// Whether the celebrate control has been pressed. Never reset.
    #[must_use]
    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    #[must_use]
    pub fn autoplay(&self) -> Autoplay {
        self.autoplay
    }

    /// Both rows finished by any means.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.candles.is_full() && self.balloons.is_full()
    }

    /// Whether the confetti overlay should be on screen.
    #[must_use]
    pub fn show_confetti(&self) -> bool {
        self.celebrating || self.is_complete()
    }

    /// Whether the celebrate control accepts presses.
    #[must_use]
    pub fn can_celebrate(&self) -> bool {
        !self.celebrating
    }

    /// Whether the candle at `index` is drawn lit.
    ///
    /// During a celebration the next candle is drawn lit one tick early, as
    /// it catches the flame. Counts are unaffected.
    #[must_use]
    pub fn candle_appears_lit(&self, index: usize) -> bool {
        let count = usize::from(self.candles.count());
        if self.celebrating {
            index <= count && index < usize::from(self.candles.total())
        } else {
            index < count
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_complete() {
            Phase::Complete
        } else if self.celebrating && !self.candles.is_full() {
            Phase::AutoCelebrating
        } else if self.celebrating || !self.candles.is_empty() || !self.balloons.is_empty() {
            Phase::InProgress
        } else {
            Phase::Idle
        }
    }

    /// Applies `event` in place and reports what it did.
    pub fn apply(&mut self, event: Event) -> Outcome {
        let confetti_before = self.show_confetti();
        let mut outcome = Outcome::default();

        match event {
            Event::LightCandle(index) => {
                outcome.changed = self.candles.advance_from(index);
            }
            Event::PopBalloon(index) => {
                outcome.changed = self.balloons.advance_from(index);
            }
            Event::Celebrate => {
                if !self.celebrating {
                    self.celebrating = true;
                    outcome.changed = true;
                    outcome.autoplay_started = self.autoplay.start();
                }
            }
            Event::AutoplayTick => {
                if self.autoplay.is_running() {
                    outcome.changed = self.candles.step();
                }
            }
            Event::Teardown => {
                outcome.autoplay_stopped = self.autoplay.finish();
            }
        }

        // A full candle row leaves the timer nothing to do, whoever filled it.
        if self.autoplay.is_running() && self.candles.is_full() {
            outcome.autoplay_stopped = self.autoplay.finish();
        }

        outcome.confetti_raised = !confetti_before && self.show_confetti();
        outcome
    }
}

/// Pure transition: returns the state after `event`.
#[must_use]
pub fn transition(state: CelebrationState, event: Event) -> CelebrationState {
    let mut next = state;
    next.apply(event);
    next
}
