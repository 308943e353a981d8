// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! - [`card`] - The greeting card (header, candles, balloons, celebrate button)
//! - [`state`] - Window-level state (viewport observer)
//! - [`widgets`] - Canvas widgets (candle and balloon glyphs, confetti overlay)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod card;
pub mod design_tokens;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
