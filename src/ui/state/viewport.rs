// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the window size used to lay out the confetti overlay. The observer
//! is attached while the card is on screen; once detached, resize events are
//! ignored and the app stops listening for them.

use iced::Size;

/// Window size in whole logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Converts a logical window size, rounding to the nearest pixel and
    /// clamping negative or non-finite values to zero.
    #[must_use]
    pub fn from_logical(size: Size) -> Self {
        Self {
            width: to_pixels(size.width),
            height: to_pixels(size.height),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_pixels(value: f32) -> u32 {
    if value.is_finite() && value > 0.0 {
        // Bounded by u32::MAX before the cast.
        value.round().min(u32::MAX as f32) as u32
    } else {
        0
    }
}

/// Follows window resizes for the lifetime of the card.
#[derive(Debug, Clone)]
pub struct ViewportObserver {
    size: ViewportSize,
    attached: bool,
}

impl ViewportObserver {
    /// Mounts the observer with the size the window was created with.
    #[must_use]
    pub fn mount(initial: ViewportSize) -> Self {
        Self {
            size: initial,
            attached: true,
        }
    }

    #[must_use]
    pub fn size(&self) -> ViewportSize {
        self.size
    }

    /// Whether resize events should still be delivered.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Records a new window size. Returns whether the size changed.
    pub fn resized(&mut self, size: Size) -> bool {
        if !self.attached {
            return false;
        }
        let next = ViewportSize::from_logical(size);
        let changed = next != self.size;
        self.size = next;
        changed
    }

    /// Stops following resizes. Returns whether the observer was attached.
    pub fn detach(&mut self) -> bool {
        std::mem::replace(&mut self.attached, false)
    }
}
