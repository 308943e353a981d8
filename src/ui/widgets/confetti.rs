// SPDX-License-Identifier: MPL-2.0
//! Confetti overlay drawn with Canvas.
//!
//! [`ConfettiField`] owns the particle simulation and is advanced from the
//! app's frame subscription. [`ConfettiField::overlay`] wraps it in a
//! full-size `Canvas` that is stacked over the card.
//!
//! Pieces start above the top edge, drift sideways, fall under gravity and
//! tumble. With `recycle` off, a piece that leaves the bottom edge is gone
//! for good, and the field reports itself finished once all pieces are gone.

use crate::config::{CONFETTI_PARTICLE_COUNT, CONFETTI_RECYCLE};
use crate::ui::design_tokens::palette;
use crate::ui::state::ViewportSize;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::time::Instant;

/// Downward acceleration, in pixels per second squared.
const GRAVITY: f32 = 220.0;

/// Upper bound on a single simulation step, so a stalled window does not
/// teleport every piece off screen at once.
const MAX_STEP_SECS: f32 = 0.05;

/// Extra room below the bottom edge before a piece counts as gone.
const EXIT_MARGIN: f32 = 24.0;

/// Parameters handed to the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiParams {
    pub size: ViewportSize,
    pub palette: [Color; 7],
    pub particle_count: usize,
    pub recycle: bool,
}

impl ConfettiParams {
    /// Card defaults: 500 non-recycling pieces in the festive palette.
    #[must_use]
    pub fn for_viewport(size: ViewportSize) -> Self {
        Self {
            size,
            palette: palette::CONFETTI,
            particle_count: CONFETTI_PARTICLE_COUNT,
            recycle: CONFETTI_RECYCLE,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Piece {
    position: Point,
    velocity: Vector,
    angle: f32,
    spin: f32,
    width: f32,
    height: f32,
    color: usize,
    active: bool,
}

/// Running confetti simulation.
pub struct ConfettiField {
    params: ConfettiParams,
    pieces: Vec<Piece>,
    rng: StdRng,
    last_frame: Option<Instant>,
    cache: Cache,
}

impl fmt::Debug for ConfettiField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfettiField")
            .field("size", &self.params.size)
            .field("active", &self.active_count())
            .finish_non_exhaustive()
    }
}

impl ConfettiField {
    /// Releases a fresh batch of confetti.
    #[must_use]
    pub fn new(params: ConfettiParams) -> Self {
        Self::with_rng(params, StdRng::from_os_rng())
    }

    /// Same as [`ConfettiField::new`] with a fixed seed.
    #[must_use]
    pub fn with_seed(params: ConfettiParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    fn with_rng(params: ConfettiParams, mut rng: StdRng) -> Self {
        let pieces = (0..params.particle_count)
            .map(|_| spawn(&mut rng, &params, true))
            .collect();
        Self {
            params,
            pieces,
            rng,
            last_frame: None,
            cache: Cache::default(),
        }
    }

    #[must_use]
    pub fn params(&self) -> &ConfettiParams {
        &self.params
    }

    /// Number of pieces still on their way down.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.pieces.iter().filter(|piece| piece.active).count()
    }

    /// Whether every piece has left the screen for good.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.params.recycle && self.active_count() == 0
    }

    /// Follows a viewport resize. Pieces already in flight keep falling.
    pub fn resize(&mut self, size: ViewportSize) {
        if self.params.size != size {
            self.params.size = size;
            self.cache.clear();
        }
    }

    /// Advances the simulation to the frame at `now`.
    pub fn frame(&mut self, now: Instant) {
        let dt = self
            .last_frame
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f32());
        self.last_frame = Some(now);
        self.step(dt);
    }

    /// Advances the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_STEP_SECS);
        if dt == 0.0 {
            return;
        }

        #[allow(clippy::cast_precision_loss)]
        let floor = self.params.size.height as f32 + EXIT_MARGIN;
        for index in 0..self.pieces.len() {
            let piece = &mut self.pieces[index];
            if !piece.active {
                continue;
            }
            piece.velocity.y += GRAVITY * dt;
            piece.position = piece.position + piece.velocity * dt;
            piece.angle += piece.spin * dt;

            if piece.position.y <= floor {
                continue;
            }
            self.pieces[index] = if self.params.recycle {
                spawn(&mut self.rng, &self.params, false)
            } else {
                Piece {
                    active: false,
                    ..self.pieces[index]
                }
            };
        }
        self.cache.clear();
    }

    /// Full-size canvas drawing the current pieces.
    pub fn overlay<Message: 'static>(&self) -> Element<'_, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Creates one piece. Initial pieces are spread over a band above the top
/// edge so they arrive staggered; recycled pieces re-enter right at the top.
fn spawn(rng: &mut StdRng, params: &ConfettiParams, initial: bool) -> Piece {
    #[allow(clippy::cast_precision_loss)]
    let width = params.size.width.max(1) as f32;
    #[allow(clippy::cast_precision_loss)]
    let height = params.size.height.max(1) as f32;

    let y = if initial {
        -rng.random_range(0.0..height)
    } else {
        -rng.random_range(0.0..EXIT_MARGIN)
    };

    Piece {
        position: Point::new(rng.random_range(0.0..width), y),
        velocity: Vector::new(rng.random_range(-60.0..60.0), rng.random_range(40.0..160.0)),
        angle: rng.random_range(0.0..std::f32::consts::TAU),
        spin: rng.random_range(-6.0..6.0),
        width: rng.random_range(5.0..10.0),
        height: rng.random_range(10.0..18.0),
        color: rng.random_range(0..params.palette.len()),
        active: true,
    }
}

impl<Message> canvas::Program<Message> for ConfettiField {
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
                for piece in self.pieces.iter().filter(|piece| piece.active) {
                    if piece.position.y < -piece.height {
                        continue;
                    }
                    let color = self.params.palette[piece.color];
                    frame.with_save(|frame| {
                        frame.translate(Vector::new(piece.position.x, piece.position.y));
                        frame.rotate(piece.angle);
                        frame.fill_rectangle(
                            Point::new(-piece.width / 2.0, -piece.height / 2.0),
                            Size::new(piece.width, piece.height),
                            color,
                        );
                    });
                }
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, assert_relative_eq, PHYSICS_EPSILON};
    use std::time::Duration;

    fn params(width: u32, height: u32) -> ConfettiParams {
        ConfettiParams::for_viewport(ViewportSize::new(width, height))
    }

    fn run_until_done(field: &mut ConfettiField, max_steps: usize) -> usize {
        for steps in 0..max_steps {
            if field.is_finished() {
                return steps;
            }
            field.step(MAX_STEP_SECS);
        }
        max_steps
    }

    #[test]
    fn releases_default_piece_count() {
        let field = ConfettiField::with_seed(params(800, 600), 1);
        assert_eq!(field.active_count(), 500);
        assert_eq!(field.params().palette, palette::CONFETTI);
        assert!(!field.params().recycle);
        assert!(!field.is_finished());
    }

    #[test]
    fn pieces_start_inside_viewport_width() {
        let field = ConfettiField::with_seed(params(300, 200), 2);
        for piece in &field.pieces {
            assert!((0.0..300.0).contains(&piece.position.x));
            assert!(piece.position.y <= 0.0);
            assert!(piece.color < 7);
        }
    }

    #[test]
    fn non_recycling_field_finishes() {
        let mut field = ConfettiField::with_seed(params(400, 300), 3);
        let steps = run_until_done(&mut field, 10_000);
        assert!(steps < 10_000);
        assert_eq!(field.active_count(), 0);

        field.step(MAX_STEP_SECS);
        assert_eq!(field.active_count(), 0);
    }

    #[test]
    fn recycling_field_never_finishes() {
        let mut config = params(200, 150);
        config.recycle = true;
        config.particle_count = 20;
        let mut field = ConfettiField::with_seed(config, 4);
        for _ in 0..2_000 {
            field.step(MAX_STEP_SECS);
        }
        assert_eq!(field.active_count(), 20);
        assert!(!field.is_finished());
    }

    #[test]
    fn first_frame_does_not_move_pieces() {
        let mut field = ConfettiField::with_seed(params(400, 300), 5);
        let before: Vec<Point> = field.pieces.iter().map(|p| p.position).collect();
        field.frame(Instant::now());
        let after: Vec<Point> = field.pieces.iter().map(|p| p.position).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn later_frames_move_pieces_down() {
        let mut field = ConfettiField::with_seed(params(400, 300), 6);
        let start = Instant::now();
        field.frame(start);
        let before: f32 = field.pieces.iter().map(|p| p.position.y).sum();
        field.frame(start + Duration::from_millis(16));
        let after: f32 = field.pieces.iter().map(|p| p.position.y).sum();
        assert!(after > before);
    }

    #[test]
    fn resize_updates_bounds_only() {
        let mut field = ConfettiField::with_seed(params(400, 300), 7);
        field.resize(ViewportSize::new(1000, 900));
        assert_eq!(field.params().size, ViewportSize::new(1000, 900));
        assert_eq!(field.active_count(), 500);
    }

    #[test]
    fn empty_viewport_still_finishes() {
        let mut field = ConfettiField::with_seed(params(0, 0), 8);
        assert_eq!(field.active_count(), 500);
        assert!(run_until_done(&mut field, 10_000) < 10_000);
    }

    #[test]
    fn step_applies_gravity_and_velocity() {
        let mut field = ConfettiField::with_seed(params(400, 300), 9);
        let before = field.pieces[0];
        field.step(0.02);
        let after = field.pieces[0];

        let vy = before.velocity.y + GRAVITY * 0.02;
        assert_relative_eq!(after.velocity.y, vy, epsilon = PHYSICS_EPSILON);
        assert_abs_diff_eq!(
            after.position.x,
            before.position.x + before.velocity.x * 0.02,
            epsilon = PHYSICS_EPSILON
        );
        assert_abs_diff_eq!(
            after.position.y,
            before.position.y + vy * 0.02,
            epsilon = PHYSICS_EPSILON
        );
        assert_abs_diff_eq!(after.angle, before.angle + before.spin * 0.02, epsilon = PHYSICS_EPSILON);
    }

    #[test]
    fn oversized_step_is_clamped() {
        let mut field = ConfettiField::with_seed(params(400, 300), 10);
        let before = field.pieces[0];
        field.step(5.0);
        let vy = before.velocity.y + GRAVITY * MAX_STEP_SECS;
        assert_relative_eq!(field.pieces[0].velocity.y, vy, epsilon = PHYSICS_EPSILON);
    }
}
