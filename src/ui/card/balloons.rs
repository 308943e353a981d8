// SPDX-License-Identifier: MPL-2.0
//! Row of clickable balloons.

use super::Message;
use crate::celebration::CelebrationState;
use crate::ui::design_tokens::{palette, spacing};
use crate::ui::styles;
use crate::ui::widgets::BalloonIcon;
use iced::widget::{button, Row};
use iced::Element;

pub fn view(state: &CelebrationState) -> Element<'static, Message> {
    let balloons = state.balloons();

    (0..usize::from(balloons.total()))
        .fold(Row::new().spacing(spacing::XS), |row, index| {
            let color = palette::BALLOONS[index % palette::BALLOONS.len()];
            let icon = BalloonIcon::new(color, balloons.is_done(index)).into_element();
            row.push(
                button(icon)
                    .padding(spacing::XXS)
                    .style(styles::button::icon)
                    .on_press(Message::PopBalloon(index)),
            )
        })
        .into()
}
