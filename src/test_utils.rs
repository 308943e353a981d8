// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.
//!
//! Re-exports the `approx` assertions used for the confetti physics, where
//! positions and velocities are accumulated `f32` values.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Tolerance for simulation values that should match a closed-form result.
pub const PHYSICS_EPSILON: f32 = 1e-3;
