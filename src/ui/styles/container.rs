// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Greeting card surface.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so the card stays readable in both light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            color: palette::WHITE,
            width: 2.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Thin banner shown on the card when the config could not be read.
pub fn warning_banner(theme: &Theme) -> container::Style {
    let warning = theme.extended_palette().danger.weak;

    container::Style {
        background: Some(Background::Color(warning.color)),
        text_color: Some(warning.text),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
