// SPDX-License-Identifier: MPL-2.0
//! Birthday card game logic, independent of any rendering.
//!
//! The card holds two order-enforced counters (candles lit, balloons popped)
//! and a celebrating flag. Pressing celebrate raises the confetti at once and
//! starts a single autoplay timer that lights the remaining candles.

pub mod autoplay;
pub mod progress;
pub mod state;

pub use autoplay::Autoplay;
pub use progress::Progress;
pub use state::{transition, CelebrationState, Event, Outcome, Phase};
