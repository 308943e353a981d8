// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! The game thresholds below are fixed. They are deliberately absent from
//! `settings.toml` so a card always plays the same way.
//!
//! # Categories
//!
//! - **Progress**: Candle and balloon totals
//! - **Autoplay**: Celebration timer cadence
//! - **Confetti**: Particle overlay parameters
//! - **Window**: Default and minimum window sizes
//! - **Greeting**: Fallback card text

use std::time::Duration;

// ==========================================================================
// Progress Defaults
// ==========================================================================

/// Number of candles on the card.
pub const TOTAL_CANDLES: u8 = 6;

/// Number of balloons on the card.
pub const TOTAL_BALLOONS: u8 = 6;

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Interval between two candles lit by the celebration timer (milliseconds).
pub const AUTOPLAY_TICK_MS: u64 = 500;

/// Interval between two candles lit by the celebration timer.
pub const AUTOPLAY_TICK: Duration = Duration::from_millis(AUTOPLAY_TICK_MS);

// ==========================================================================
// Confetti Defaults
// ==========================================================================

/// Number of confetti pieces released by the overlay.
pub const CONFETTI_PARTICLE_COUNT: usize = 500;

/// Whether confetti pieces are respawned after leaving the screen.
pub const CONFETTI_RECYCLE: bool = false;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: u32 = 520;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

// ==========================================================================
// Greeting Defaults
// ==========================================================================

/// Recipient shown when neither the CLI nor the config names one.
pub const DEFAULT_RECIPIENT: &str = "Maryam Ansari";

/// Age celebrated by default.
pub const DEFAULT_AGE: u32 = 21;

/// Day of month shown under the recipient's name.
pub const DEFAULT_DAY: u32 = 24;

/// Month shown under the recipient's name (1 = January).
pub const DEFAULT_MONTH: u32 = 5;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(TOTAL_CANDLES > 0);
    assert!(TOTAL_BALLOONS > 0);
    assert!(AUTOPLAY_TICK_MS > 0);
    assert!(CONFETTI_PARTICLE_COUNT > 0);
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
    assert!(DEFAULT_DAY >= 1 && DEFAULT_DAY <= 31);
    assert!(DEFAULT_MONTH >= 1 && DEFAULT_MONTH <= 12);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_totals_match_card_layout() {
        assert_eq!(TOTAL_CANDLES, 6);
        assert_eq!(TOTAL_BALLOONS, 6);
    }

    #[test]
    fn autoplay_lights_every_candle_in_three_seconds() {
        assert_eq!(
            AUTOPLAY_TICK * u32::from(TOTAL_CANDLES),
            Duration::from_millis(3000)
        );
    }

    #[test]
    fn confetti_defaults_are_valid() {
        assert_eq!(CONFETTI_PARTICLE_COUNT, 500);
        assert!(!CONFETTI_RECYCLE);
    }
}
