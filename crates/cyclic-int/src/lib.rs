//! # Cyclic-Int
//!
//! Integers constrained to a half-open interval `[left, right)` with modular
//! wrap-around on addition, subtraction and negation.
//!
//! ## Components
//!
//! - `domain::interval` - `Interval` bounds and the normalization formula
//! - `domain::operand` - `IntegerLike` conversion contract for operands
//! - `domain::cyclic_int` - `CyclicInt` value type
//! - `domain::cyclic_list` - `CyclicList` with wrap-around positions
//! - `config` - serde-loadable interval configuration
//! - `error` - `CyclicIntError`
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: `right > left`, fixed at construction
//! - **INVARIANT-2**: `left <= value < right` after every operation
//! - **INVARIANT-3**: `value = left + ((raw - left) mod span)`, Euclidean modulo
//!
//! ## Usage Example
//!
//! ```ignore
//! use cyclic_int::CyclicInt;
//!
//! let mut x = CyclicInt::new(0, 5)?;
//! x += 7;
//! assert_eq!(x, 2);
//! assert_eq!(3 - CyclicInt::new(1, 5)?, 2);
//!
//! // Cyclic values only combine with plain integers
//! assert!(x.try_add(CyclicInt::new(1, 5)?).is_err());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod domain;
pub mod error;

pub use config::IntervalConfig;
pub use domain::{CyclicInt, CyclicList, IntegerLike, Interval};
pub use error::CyclicIntError;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
