// SPDX-License-Identifier: MPL-2.0
//! Candle and balloon glyphs drawn with Canvas.

use crate::ui::design_tokens::{palette, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};

/// A birthday candle, optionally lit.
pub struct CandleIcon {
    cache: Cache,
    color: Color,
    lit: bool,
}

impl CandleIcon {
    /// Lit candles use `color`; unlit ones are drawn in gray.
    #[must_use]
    pub fn new(color: Color, lit: bool) -> Self {
        Self {
            cache: Cache::default(),
            color,
            lit,
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::CANDLE_WIDTH))
            .height(Length::Fixed(sizing::CANDLE_HEIGHT))
            .into()
    }
}

impl<Message> canvas::Program<Message> for CandleIcon {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let width = frame.width();
                let height = frame.height();
                let body_width = width * 0.4;
                let body_top = height * 0.4;
                let body_x = (width - body_width) / 2.0;
                let body_color = if self.lit { self.color } else { palette::GRAY_300 };

                frame.fill_rectangle(
                    Point::new(body_x, body_top),
                    Size::new(body_width, height - body_top),
                    body_color,
                );

                let wick_top = body_top - height * 0.1;
                let wick = Path::line(
                    Point::new(width / 2.0, wick_top),
                    Point::new(width / 2.0, body_top),
                );
                frame.stroke(
                    &wick,
                    Stroke::default()
                        .with_width(1.5)
                        .with_color(palette::GRAY_400),
                );

                if self.lit {
                    let flame = Path::circle(Point::new(width / 2.0, wick_top - 5.0), 5.0);
                    frame.fill(&flame, palette::FLAME);
                }
            });

        vec![geometry]
    }
}

/// A balloon on a string, or the gray scrap left after popping it.
pub struct BalloonIcon {
    cache: Cache,
    color: Color,
    popped: bool,
}

impl BalloonIcon {
    #[must_use]
    pub fn new(color: Color, popped: bool) -> Self {
        Self {
            cache: Cache::default(),
            color,
            popped,
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::BALLOON))
            .height(Length::Fixed(sizing::BALLOON))
            .into()
    }
}

impl<Message> canvas::Program<Message> for BalloonIcon {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = Point::new(frame.width() / 2.0, frame.height() * 0.4);
                let radius = frame.width().min(frame.height()) * 0.35;

                if self.popped {
                    frame.fill(&Path::circle(center, radius * 0.2), palette::GRAY_300);
                    return;
                }

                frame.fill(&Path::circle(center, radius), self.color);

                let knot_top = center.y + radius;
                let string = Path::line(
                    Point::new(center.x, knot_top),
                    Point::new(center.x, frame.height()),
                );
                frame.stroke(
                    &string,
                    Stroke::default()
                        .with_width(1.0)
                        .with_color(palette::GRAY_400),
                );
            });

        vec![geometry]
    }
}
