//! # Cyclic Integer
//!
//! An integer bound to a half-open interval `[left, right)` that wraps around
//! on addition and subtraction.
//!
//! ## Invariants
//!
//! - The interval never changes after construction.
//! - After every operation `left <= value < right`, with
//!   `value = left + ((raw - left) mod span)`.
//!
//! Equality, ordering and hashing look only at the visible value, so a
//! `CyclicInt` and an `i64` holding the same number are interchangeable as
//! map keys.
//!
//! ## Example
//!
//! ```ignore
//! use cyclic_int::CyclicInt;
//!
//! let mut hour = CyclicInt::new(22, 24)?;
//! hour += 5;
//! assert_eq!(hour, 3);
//! assert_eq!(-hour, 21);
//! ```

use crate::domain::interval::Interval;
use crate::domain::operand::{plain_integer, IntegerLike};
use crate::error::CyclicIntError;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Integer constrained to `[left, right)` with wrap-around arithmetic.
#[derive(Clone, Copy)]
pub struct CyclicInt {
    interval: Interval,
    current: i64,
}

impl CyclicInt {
    /// Create a cyclic integer on `[0, right)`.
    pub fn new<T: IntegerLike>(current: T, right: i64) -> Result<Self, CyclicIntError> {
        Self::with_bounds(current, 0, right)
    }

    /// Create a cyclic integer on `[left, right)`.
    ///
    /// Fails with [`CyclicIntError::InvalidInterval`] if `right <= left`.
    pub fn with_bounds<T: IntegerLike>(
        current: T,
        left: i64,
        right: i64,
    ) -> Result<Self, CyclicIntError> {
        let interval = Interval::new(left, right)?;
        Self::in_interval(current, interval)
    }

    /// Create a cyclic integer on an already validated interval.
    ///
    /// `current` may be another cyclic integer; only its value is used.
    pub fn in_interval<T: IntegerLike>(
        current: T,
        interval: Interval,
    ) -> Result<Self, CyclicIntError> {
        let raw = current.to_integer()?;
        Ok(Self {
            interval,
            current: interval.normalize(raw),
        })
    }

    /// The normalized value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.current
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn left(&self) -> i64 {
        self.interval.left()
    }

    /// Exclusive upper bound.
    #[must_use]
    pub const fn right(&self) -> i64 {
        self.interval.right()
    }

    /// `right - left`.
    #[must_use]
    pub fn span(&self) -> u64 {
        self.interval.span()
    }

    /// The interval this value lives on.
    #[must_use]
    pub const fn interval(&self) -> Interval {
        self.interval
    }

    // -------------------------------------------------------------------------
    // Addition
    // -------------------------------------------------------------------------

    /// `self + other` as a new value on the same interval.
    pub fn try_add<T: IntegerLike>(&self, other: T) -> Result<Self, CyclicIntError> {
        let other = plain_integer(&other, "add")?;
        Ok(self.with_value(self.shifted(other)))
    }

    /// `self += other`, returning `self` for chaining.
    ///
    /// The value is left untouched if `other` is rejected.
    pub fn try_add_assign<T: IntegerLike>(
        &mut self,
        other: T,
    ) -> Result<&mut Self, CyclicIntError> {
        let other = plain_integer(&other, "add")?;
        self.current = self.shifted(other);
        Ok(self)
    }

    /// `other + self`. Same result as [`CyclicInt::try_add`].
    pub fn try_reflected_add<T: IntegerLike>(&self, other: T) -> Result<Self, CyclicIntError> {
        self.try_add(other)
    }

    // -------------------------------------------------------------------------
    // Subtraction
    // -------------------------------------------------------------------------

    /// `self - other` as a new value on the same interval.
    pub fn try_sub<T: IntegerLike>(&self, other: T) -> Result<Self, CyclicIntError> {
        let other = plain_integer(&other, "subtract")?;
        Ok(self.with_value(self.shifted(-self.interval.reduce(other))))
    }

    /// `self -= other`, returning `self` for chaining.
    ///
    /// The value is left untouched if `other` is rejected.
    pub fn try_sub_assign<T: IntegerLike>(
        &mut self,
        other: T,
    ) -> Result<&mut Self, CyclicIntError> {
        let other = plain_integer(&other, "subtract")?;
        self.current = self.shifted(-self.interval.reduce(other));
        Ok(self)
    }

    /// `other - self`, which equals `-(self - other)` on the same interval.
    pub fn try_reflected_sub<T: IntegerLike>(&self, other: T) -> Result<Self, CyclicIntError> {
        let other = plain_integer(&other, "subtract")?;
        let raw = self.interval.reduce(other) - i128::from(self.current);
        Ok(self.with_value(self.interval.normalize(raw)))
    }

    /// Usable as a slice index when the value is non-negative.
    pub fn as_index(&self) -> Result<usize, CyclicIntError> {
        Ok(usize::try_from(self.current)?)
    }

    /// Normalized `current + delta`; `delta` is reduced first so the sum
    /// stays inside `i128`.
    fn shifted(&self, delta: i128) -> i64 {
        self.interval
            .normalize(i128::from(self.current) + self.interval.reduce(delta))
    }

    fn with_value(&self, current: i64) -> Self {
        Self {
            interval: self.interval,
            current,
        }
    }
}

impl IntegerLike for CyclicInt {
    fn to_integer(&self) -> Result<i128, CyclicIntError> {
        Ok(i128::from(self.current))
    }

    fn attached_interval(&self) -> Option<Interval> {
        Some(self.interval)
    }
}

// =============================================================================
// OPERATORS
// =============================================================================
//
// Only `CyclicInt op i64` and `i64 op CyclicInt` are defined. Combining two
// cyclic values does not type-check; the `try_*` methods report it at runtime.

impl Add<i64> for CyclicInt {
    type Output = Self;

    fn add(self, rhs: i64) -> Self {
        self.with_value(self.shifted(i128::from(rhs)))
    }
}

impl Add<CyclicInt> for i64 {
    type Output = CyclicInt;

    fn add(self, rhs: CyclicInt) -> CyclicInt {
        rhs + self
    }
}

impl AddAssign<i64> for CyclicInt {
    fn add_assign(&mut self, rhs: i64) {
        self.current = self.shifted(i128::from(rhs));
    }
}

impl Sub<i64> for CyclicInt {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self {
        self.with_value(self.shifted(-i128::from(rhs)))
    }
}

impl Sub<CyclicInt> for i64 {
    type Output = CyclicInt;

    fn sub(self, rhs: CyclicInt) -> CyclicInt {
        let raw = i128::from(self) - i128::from(rhs.current);
        rhs.with_value(rhs.interval.normalize(raw))
    }
}

impl SubAssign<i64> for CyclicInt {
    fn sub_assign(&mut self, rhs: i64) {
        self.current = self.shifted(-i128::from(rhs));
    }
}

impl Neg for CyclicInt {
    type Output = Self;

    fn neg(self) -> Self {
        self.with_value(self.interval.normalize(-i128::from(self.current)))
    }
}

// =============================================================================
// COMPARISON & HASHING
// =============================================================================

impl PartialEq for CyclicInt {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl Eq for CyclicInt {}

impl PartialEq<i64> for CyclicInt {
    fn eq(&self, other: &i64) -> bool {
        self.current == *other
    }
}

impl PartialEq<CyclicInt> for i64 {
    fn eq(&self, other: &CyclicInt) -> bool {
        *self == other.current
    }
}

impl PartialOrd for CyclicInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CyclicInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.current.cmp(&other.current)
    }
}

impl PartialOrd<i64> for CyclicInt {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.current.partial_cmp(other)
    }
}

impl PartialOrd<CyclicInt> for i64 {
    fn partial_cmp(&self, other: &CyclicInt) -> Option<Ordering> {
        self.partial_cmp(&other.current)
    }
}

impl Hash for CyclicInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.current.hash(state);
    }
}

impl Borrow<i64> for CyclicInt {
    fn borrow(&self) -> &i64 {
        &self.current
    }
}

// =============================================================================
// CONVERSIONS & FORMATTING
// =============================================================================

impl From<CyclicInt> for i64 {
    fn from(value: CyclicInt) -> Self {
        value.current
    }
}

impl From<CyclicInt> for i128 {
    fn from(value: CyclicInt) -> Self {
        i128::from(value.current)
    }
}

impl TryFrom<CyclicInt> for usize {
    type Error = CyclicIntError;

    fn try_from(value: CyclicInt) -> Result<Self, Self::Error> {
        value.as_index()
    }
}

impl fmt::Debug for CyclicInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CyclicInt")
            .field("value", &self.current)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

macro_rules! delegate_fmt {
    ($($trait:ident),* $(,)?) => {
        $(
            impl fmt::$trait for CyclicInt {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::$trait::fmt(&self.current, f)
                }
            }
        )*
    };
}

delegate_fmt!(Display, Binary, Octal, LowerHex, UpperHex);
