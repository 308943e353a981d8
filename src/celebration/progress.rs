// SPDX-License-Identifier: MPL-2.0
//! Bounded progress counter for candles and balloons.
//!
//! A `Progress` only ever grows, one unit at a time, and never past its
//! total. There is no way to decrement or reset it.

/// Number of items done out of a fixed total.
///
/// # Example
///
/// ```
/// use birthday_wish::celebration::Progress;
///
/// let mut candles = Progress::new(6);
/// assert!(candles.advance_from(0));
/// assert!(!candles.advance_from(0)); // next expected index is 1
/// assert_eq!(candles.count(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    count: u8,
    total: u8,
}

impl Progress {
    /// Creates an empty counter for `total` items.
    #[must_use]
    pub const fn new(total: u8) -> Self {
        Self { count: 0, total }
    }

    #[must_use]
    pub fn count(self) -> u8 {
        self.count
    }

    #[must_use]
    pub fn total(self) -> u8 {
        self.total
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.count == 0
    }

    #[must_use]
    pub fn is_full(self) -> bool {
        self.count >= self.total
    }

    /// Index of the only item that currently responds to a click.
    #[must_use]
    pub fn next_index(self) -> Option<usize> {
        (!self.is_full()).then_some(usize::from(self.count))
    }

    /// Whether the item at `index` is already done.
    #[must_use]
    pub fn is_done(self, index: usize) -> bool {
        index < usize::from(self.count)
    }

    /// Advances by one if `index` is the next item in left-to-right order.
    ///
    /// Returns whether the counter moved. Any other index is ignored.
    pub fn advance_from(&mut self, index: usize) -> bool {
        if self.next_index() == Some(index) {
            self.count += 1;
            true
        } else {
            false
        }
    }

    /// Advances by one unless already full. Returns whether the counter moved.
    pub fn step(&mut self) -> bool {
        if self.is_full() {
            false
        } else {
            self.count += 1;
            true
        }
    }
}
