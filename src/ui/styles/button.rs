// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Lilac "Celebrate!" button. Disabled once the celebration started.
pub fn celebrate(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::BUTTON_LILAC_HOVER,
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BUTTON_LILAC
        },
        _ => palette::BUTTON_LILAC,
    };
    let text_color = match status {
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BUTTON_PINK_TEXT
        },
        _ => palette::BUTTON_PINK_TEXT,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MD.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Borderless wrapper around a clickable candle or balloon.
pub fn icon(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::WHITE
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: palette::GRAY_900,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}
