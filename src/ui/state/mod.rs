// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State that belongs to the window rather than to the card itself.

pub mod viewport;

pub use viewport::{ViewportObserver, ViewportSize};
