// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::celebration::{CelebrationState, Event, Outcome};
use crate::ui::card;
use crate::ui::state::ViewportObserver;
use crate::ui::widgets::{ConfettiField, ConfettiParams};
use iced::{window, Size, Task};
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub state: &'a mut CelebrationState,
    pub viewport: &'a mut ViewportObserver,
    pub confetti: &'a mut Option<ConfettiField>,
}

/// Dispatches a top-level message.
pub fn handle_message(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Card(card_message) => {
            apply_event(ctx, card::update(card_message));
            Task::none()
        }
        Message::AutoplayTick(_instant) => {
            apply_event(ctx, Event::AutoplayTick);
            Task::none()
        }
        Message::ConfettiFrame(now) => {
            handle_confetti_frame(ctx, now);
            Task::none()
        }
        Message::WindowOpened(size) => {
            handle_resize(ctx, size);
            Task::none()
        }
        Message::WindowResized(size) => {
            handle_resize(ctx, size);
            Task::none()
        }
        Message::WindowCloseRequested(id) => handle_close_requested(ctx, id),
    }
}

/// Applies a state event and performs its side effects.
pub fn apply_event(ctx: &mut UpdateContext<'_>, event: Event) -> Outcome {
    let outcome = ctx.state.apply(event);

    if outcome.changed {
        tracing::debug!(
            ?event,
            candles = ctx.state.candles().count(),
            balloons = ctx.state.balloons().count(),
            phase = ?ctx.state.phase(),
            "card updated"
        );
    }
    if outcome.autoplay_started {
        tracing::info!("celebration started, lighting remaining candles");
    }
    if outcome.autoplay_stopped {
        tracing::info!(candles = ctx.state.candles().count(), "autoplay stopped");
    }
    if outcome.confetti_raised {
        let params = ConfettiParams::for_viewport(ctx.viewport.size());
        tracing::info!(
            width = params.size.width,
            height = params.size.height,
            pieces = params.particle_count,
            "releasing confetti"
        );
        *ctx.confetti = Some(ConfettiField::new(params));
    }

    outcome
}

fn handle_confetti_frame(ctx: &mut UpdateContext<'_>, now: Instant) {
    if let Some(field) = ctx.confetti.as_mut() {
        field.frame(now);
        if field.is_finished() {
            tracing::debug!("confetti finished");
        }
    }
}

fn handle_resize(ctx: &mut UpdateContext<'_>, size: Size) {
    if ctx.viewport.resized(size) {
        let viewport = ctx.viewport.size();
        tracing::trace!(width = viewport.width, height = viewport.height, "viewport resized");
        if let Some(field) = ctx.confetti.as_mut() {
            field.resize(viewport);
        }
    }
}

/// Releases the timer and the resize listener, then closes the window.
fn handle_close_requested(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    apply_event(ctx, Event::Teardown);
    if ctx.viewport.detach() {
        tracing::debug!("viewport observer detached");
    }
    *ctx.confetti = None;
    window::close(id)
}
