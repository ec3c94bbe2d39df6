//! Integer-like operands
//!
//! Anything that can be turned into a plain integer may initialize a cyclic
//! value. Only operands without an interval of their own may take part in
//! cyclic arithmetic.

use crate::domain::interval::Interval;
use crate::error::CyclicIntError;
use tracing::debug;

/// Conversion of an operand into a plain integer.
pub trait IntegerLike {
    /// Convert to an integer, failing if there is no exact representation.
    fn to_integer(&self) -> Result<i128, CyclicIntError>;

    /// The interval this operand is bound to, if any.
    ///
    /// Plain integers have none. Cyclic arithmetic rejects operands that
    /// report one.
    fn attached_interval(&self) -> Option<Interval> {
        None
    }
}

macro_rules! impl_integer_like_lossless {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntegerLike for $t {
                fn to_integer(&self) -> Result<i128, CyclicIntError> {
                    Ok(i128::from(*self))
                }
            }
        )*
    };
}

macro_rules! impl_integer_like_fallible {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntegerLike for $t {
                fn to_integer(&self) -> Result<i128, CyclicIntError> {
                    Ok(i128::try_from(*self)?)
                }
            }
        )*
    };
}

impl_integer_like_lossless!(i8, i16, i32, i64, i128, u8, u16, u32, u64);
impl_integer_like_fallible!(isize, usize, u128);

impl<T: IntegerLike + ?Sized> IntegerLike for &T {
    fn to_integer(&self) -> Result<i128, CyclicIntError> {
        (**self).to_integer()
    }

    fn attached_interval(&self) -> Option<Interval> {
        (**self).attached_interval()
    }
}

/// Coerce `operand` for use in cyclic arithmetic.
///
/// Rejects operands carrying their own interval before converting.
pub(crate) fn plain_integer<T: IntegerLike + ?Sized>(
    operand: &T,
    operation: &'static str,
) -> Result<i128, CyclicIntError> {
    if let Some(interval) = operand.attached_interval() {
        debug!(operation, %interval, "rejected cyclic operand");
        return Err(CyclicIntError::UnsupportedOperand { operation });
    }
    operand.to_integer()
}
