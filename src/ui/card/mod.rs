// SPDX-License-Identifier: MPL-2.0
//! The greeting card: header, candle row, balloon row and celebrate button.
//!
//! Follows the "state down, messages up" pattern: the card renders a
//! [`CelebrationState`] it does not own and reports clicks as [`Message`]s,
//! which the app turns into state [`Event`]s.

mod balloons;
mod candles;
pub mod greeting;

pub use greeting::Greeting;

use crate::celebration::{CelebrationState, Event};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, text, Column};
use iced::{font, Alignment, Element, Font, Length};

/// Contextual data needed to render the card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a CelebrationState,
    pub greeting: &'a Greeting,
    /// i18n key of a startup warning to show on the card, if any.
    pub warning: Option<&'a str>,
}

/// Messages emitted by the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    LightCandle(usize),
    PopBalloon(usize),
    Celebrate,
}

/// Translates a card message into a state event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::LightCandle(index) => Event::LightCandle(index),
        Message::PopBalloon(index) => Event::PopBalloon(index),
        Message::Celebrate => Event::Celebrate,
    }
}

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Renders the card.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = column![
        text(ctx.greeting.title(ctx.i18n))
            .size(typography::TITLE_XL)
            .font(BOLD)
            .color(palette::TITLE_PURPLE),
        text(ctx.greeting.recipient_line())
            .size(typography::TITLE_LG)
            .font(BOLD)
            .color(palette::NAME_AMBER),
        text(ctx.greeting.date_line(ctx.i18n))
            .size(typography::TITLE_MD)
            .font(BOLD)
            .color(palette::DATE_BLUE),
    ]
    .spacing(spacing::XXS)
    .align_x(Alignment::Center);

    let candles_section = column![
        text(ctx.i18n.tr("candles-heading"))
            .size(typography::BODY_LG)
            .font(BOLD),
        candles::view(ctx.state),
    ]
    .spacing(spacing::XS)
    .align_x(Alignment::Center);

    let balloons_section = column![
        text(ctx.i18n.tr("balloons-heading"))
            .size(typography::BODY_LG)
            .font(BOLD),
        balloons::view(ctx.state),
    ]
    .spacing(spacing::XS)
    .align_x(Alignment::Center);

    let label_key = if ctx.state.can_celebrate() {
        "celebrate-button"
    } else {
        "celebrate-button-done"
    };
    let celebrate = button(text(ctx.i18n.tr(label_key)).font(BOLD))
        .height(sizing::BUTTON_HEIGHT)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::celebrate)
        .on_press_maybe(ctx.state.can_celebrate().then_some(Message::Celebrate));

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(Alignment::Center);

    if let Some(key) = ctx.warning {
        content = content.push(
            container(text(ctx.i18n.tr(key)).size(typography::CAPTION))
                .padding(spacing::XS)
                .style(styles::container::warning_banner),
        );
    }

    let card = container(
        content
            .push(header)
            .push(candles_section)
            .push(balloons_section)
            .push(celebrate),
    )
    .padding(spacing::XL)
    .max_width(sizing::CARD_MAX_WIDTH)
    .style(styles::container::card);

    container(card)
        .padding(spacing::MD)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_messages_map_to_events() {
        assert_eq!(update(Message::LightCandle(2)), Event::LightCandle(2));
        assert_eq!(update(Message::PopBalloon(4)), Event::PopBalloon(4));
        assert_eq!(update(Message::Celebrate), Event::Celebrate);
    }
}
