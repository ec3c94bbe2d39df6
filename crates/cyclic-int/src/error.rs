//! Error types for cyclic integers and cyclic sequences

use std::num::TryFromIntError;
use thiserror::Error;

/// Errors that can occur when building or combining cyclic values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CyclicIntError {
    /// The interval `[left, right)` is empty or inverted.
    #[error("Left border must be less than right border: [{left}; {right})")]
    InvalidInterval {
        /// Requested lower bound
        left: i64,
        /// Requested upper bound
        right: i64,
    },

    /// A cyclic value was used where only a plain integer is allowed.
    #[error("Unsupported operand for {operation}: cyclic values only combine with plain integers")]
    UnsupportedOperand {
        /// Operation that rejected the operand
        operation: &'static str,
    },

    /// A wrap-around position was requested on an empty sequence.
    #[error("Cannot wrap position {position} on an empty sequence")]
    EmptySequence {
        /// Requested position
        position: isize,
    },

    /// The operand has no representation as an integer of the required width.
    #[error(transparent)]
    Coercion(#[from] TryFromIntError),
}
