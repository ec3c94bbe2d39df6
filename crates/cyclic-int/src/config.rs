//! Interval configuration
//!
//! `IntervalConfig` is the raw shape read from configuration files. It is
//! validated on its way into an [`Interval`], so a deserialized `Interval`
//! always satisfies `right > left`.
//!
//! # Example
//!
//! ```ignore
//! use cyclic_int::Interval;
//!
//! let interval: Interval = serde_json::from_str(r#"{ "right": 24 }"#)?;
//! assert_eq!(interval.left(), 0);
//! ```

use crate::domain::interval::Interval;
use crate::error::CyclicIntError;
use serde::{Deserialize, Serialize};

/// Unvalidated interval bounds
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalConfig {
    /// Inclusive lower bound (defaults to 0)
    #[serde(default)]
    pub left: i64,
    /// Exclusive upper bound
    pub right: i64,
}

impl IntervalConfig {
    /// Create a new configuration
    pub fn new(left: i64, right: i64) -> Self {
        Self { left, right }
    }

    /// Validate the bounds
    pub fn validate(&self) -> Result<(), CyclicIntError> {
        if self.right <= self.left {
            return Err(CyclicIntError::InvalidInterval {
                left: self.left,
                right: self.right,
            });
        }
        Ok(())
    }

    /// Builder-style method to set the lower bound
    pub fn with_left(mut self, left: i64) -> Self {
        self.left = left;
        self
    }

    /// Builder-style method to set the upper bound
    pub fn with_right(mut self, right: i64) -> Self {
        self.right = right;
        self
    }
}

impl TryFrom<IntervalConfig> for Interval {
    type Error = CyclicIntError;

    fn try_from(config: IntervalConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        Interval::new(config.left, config.right)
    }
}

impl From<Interval> for IntervalConfig {
    fn from(interval: Interval) -> Self {
        Self {
            left: interval.left(),
            right: interval.right(),
        }
    }
}
