// SPDX-License-Identifier: MPL-2.0
pub mod card_icons;
pub mod confetti;

pub use card_icons::{BalloonIcon, CandleIcon};
pub use confetti::{ConfettiField, ConfettiParams};
