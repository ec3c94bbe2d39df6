//! Half-open interval `[left, right)` and wrap-around normalization
//!
//! Every cyclic operation funnels its raw result through
//! [`Interval::normalize`]:
//!
//! ```text
//! value = left + ((raw - left) mod span)
//! ```
//!
//! where `mod` is Euclidean (never negative) and `span = right - left > 0`.

use crate::config::IntervalConfig;
use crate::error::CyclicIntError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use tracing::debug;

/// Non-empty half-open interval of `i64` values.
///
/// Bounds are fixed once the interval exists; `right > left` always holds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IntervalConfig", into = "IntervalConfig")]
pub struct Interval {
    left: i64,
    right: i64,
}

impl Interval {
    /// Create the interval `[left, right)`.
    ///
    /// Fails with [`CyclicIntError::InvalidInterval`] if `right <= left`.
    pub fn new(left: i64, right: i64) -> Result<Self, CyclicIntError> {
        if right <= left {
            debug!(left, right, "rejected empty interval");
            return Err(CyclicIntError::InvalidInterval { left, right });
        }
        Ok(Self { left, right })
    }

    /// Create the interval `[0, right)`.
    pub fn up_to(right: i64) -> Result<Self, CyclicIntError> {
        Self::new(0, right)
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn left(&self) -> i64 {
        self.left
    }

    /// Exclusive upper bound.
    #[must_use]
    pub const fn right(&self) -> i64 {
        self.right
    }

    /// Number of values in the interval (`right - left`).
    #[must_use]
    pub fn span(&self) -> u64 {
        // right > left, so the difference is positive and at most 2^64 - 1
        (i128::from(self.right) - i128::from(self.left)) as u64
    }

    /// Returns true if `left <= value < right`.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.left <= value && value < self.right
    }

    /// Reduce `raw` into the interval.
    ///
    /// Equivalent to `left + ((raw - left) mod span)` with Euclidean modulo,
    /// computed so that no intermediate step can overflow. Already normalized
    /// values are returned unchanged.
    #[must_use]
    pub fn normalize(&self, raw: i128) -> i64 {
        let offset = (self.reduce(raw) - self.reduce(i128::from(self.left)))
            .rem_euclid(self.span_wide());
        // left + offset < right <= i64::MAX
        (i128::from(self.left) + offset) as i64
    }

    /// Reduce `raw` to its residue in `[0, span)`.
    ///
    /// Operands are pre-reduced with this before they are combined with a
    /// stored value, which keeps every sum and difference inside `i128`.
    #[must_use]
    pub fn reduce(&self, raw: i128) -> i128 {
        raw.rem_euclid(self.span_wide())
    }

    fn span_wide(&self) -> i128 {
        i128::from(self.span())
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}; {})", self.left, self.right)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}; {})", self.left, self.right)
    }
}

impl TryFrom<Range<i64>> for Interval {
    type Error = CyclicIntError;

    fn try_from(range: Range<i64>) -> Result<Self, Self::Error> {
        Self::new(range.start, range.end)
    }
}

impl From<Interval> for Range<i64> {
    fn from(interval: Interval) -> Self {
        interval.left..interval.right
    }
}
