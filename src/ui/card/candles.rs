// SPDX-License-Identifier: MPL-2.0
//! Row of clickable candles.

use super::Message;
use crate::celebration::CelebrationState;
use crate::ui::design_tokens::{palette, spacing};
use crate::ui::styles;
use crate::ui::widgets::CandleIcon;
use iced::widget::{button, Row};
use iced::Element;

/// Renders every candle. Each one emits `LightCandle(index)`; whether that
/// click does anything is decided by the state, not here.
pub fn view(state: &CelebrationState) -> Element<'static, Message> {
    let total = usize::from(state.candles().total());

    (0..total)
        .fold(Row::new().spacing(spacing::XS), |row, index| {
            let color = palette::CANDLES[index % palette::CANDLES.len()];
            let icon = CandleIcon::new(color, state.candle_appears_lit(index)).into_element();
            row.push(
                button(icon)
                    .padding(spacing::XXS)
                    .style(styles::button::icon)
                    .on_press(Message::LightCandle(index)),
            )
        })
        .into()
}
