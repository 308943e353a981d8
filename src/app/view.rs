// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The card is the base layer; the confetti canvas is stacked on top of it,
//! full size, while there is confetti to draw.

use super::Message;
use crate::celebration::CelebrationState;
use crate::i18n::fluent::I18n;
use crate::ui::card::{self, Greeting};
use crate::ui::widgets::ConfettiField;
use iced::widget::{stack, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a CelebrationState,
    pub greeting: &'a Greeting,
    pub confetti: Option<&'a ConfettiField>,
    pub warning: Option<&'a str>,
}

/// Renders the card and, when due, the confetti overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let card_view = card::view(card::ViewContext {
        i18n: ctx.i18n,
        state: ctx.state,
        greeting: ctx.greeting,
        warning: ctx.warning,
    })
    .map(Message::Card);

    let base = Container::new(card_view)
        .width(Length::Fill)
        .height(Length::Fill);

    match ctx.confetti.filter(|_| ctx.state.show_confetti()) {
        Some(field) if !field.is_finished() => stack![base, field.overlay()]
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        _ => base.into(),
    }
}
