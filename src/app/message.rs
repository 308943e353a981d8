// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::card;
use iced::{window, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A click on the card.
    Card(card::Message),
    /// The celebration interval fired.
    AutoplayTick(Instant),
    /// A display frame for the confetti animation.
    ConfettiFrame(Instant),
    /// The window was opened with its initial size.
    WindowOpened(Size),
    /// The window was resized.
    WindowResized(Size),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional recipient name, overriding `[greeting] recipient`.
    pub name: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `BIRTHDAY_WISH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
