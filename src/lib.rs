// SPDX-License-Identifier: MPL-2.0
//! `birthday_wish` is an interactive birthday card built with the Iced GUI framework.
//!
//! Visitors light the candles and pop the balloons; once both rows are done,
//! or when the celebrate button is pressed, confetti rains over the card.
//! Text is localized with Fluent and the card contents can be tuned from
//! `settings.toml`.

#![doc(html_root_url = "https://docs.rs/birthday_wish/0.1.0")]

pub mod app;
pub mod celebration;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
mod test_utils;
