//! # Cyclic List
//!
//! A growable sequence whose integer positions wrap around its length:
//! position `p` addresses element `p mod len` (Euclidean). Range-based
//! operations behave exactly like they do on a `Vec`.
//!
//! An empty list has no positions to wrap onto. Lookups return `None`,
//! insertion appends, and indexing panics like an out-of-bounds `Vec` index.

use crate::domain::cyclic_int::CyclicInt;
use crate::domain::interval::Interval;
use crate::error::CyclicIntError;
use std::ops::{Index, IndexMut, RangeBounds};
use tracing::trace;

/// Sequence with wrap-around positions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CyclicList<T> {
    items: Vec<T>,
}

impl<T> CyclicList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Map `position` onto `[0, len)`, or `None` if the list is empty.
    pub fn wrap(&self, position: isize) -> Option<usize> {
        let len = isize::try_from(self.items.len()).ok()?;
        if len == 0 {
            return None;
        }
        let index = position.rem_euclid(len) as usize;
        if index as isize != position {
            trace!(position, index, len, "wrapped list position");
        }
        Some(index)
    }

    /// Element at the wrapped position.
    pub fn get(&self, position: isize) -> Option<&T> {
        let index = self.wrap(position)?;
        self.items.get(index)
    }

    /// Mutable element at the wrapped position.
    pub fn get_mut(&mut self, position: isize) -> Option<&mut T> {
        let index = self.wrap(position)?;
        self.items.get_mut(index)
    }

    /// Element addressed by a cyclic cursor.
    ///
    /// The cursor's value is wrapped again, so a cursor built for a list that
    /// has since changed length still lands on an element.
    pub fn get_cyclic(&self, cursor: &CyclicInt) -> Option<&T> {
        let index = self.wrap_cyclic(cursor)?;
        self.items.get(index)
    }

    /// Replace the element at the wrapped position, returning the old one.
    pub fn set(&mut self, position: isize, value: T) -> Result<T, CyclicIntError> {
        let slot = self
            .get_mut(position)
            .ok_or(CyclicIntError::EmptySequence { position })?;
        Ok(std::mem::replace(slot, value))
    }

    /// Insert `value` before the wrapped position.
    ///
    /// On an empty list the value is appended.
    pub fn insert(&mut self, position: isize, value: T) {
        let index = self.wrap(position).unwrap_or(0);
        self.items.insert(index, value);
    }

    /// Remove and return the element at the wrapped position.
    pub fn remove(&mut self, position: isize) -> Option<T> {
        let index = self.wrap(position)?;
        Some(self.items.remove(index))
    }

    /// Remove and return the element at the wrapped position.
    ///
    /// `pop_at(-1)` removes the last element.
    pub fn pop_at(&mut self, position: isize) -> Option<T> {
        self.remove(position)
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Append an element.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// A cursor on `[0, len)` starting at the wrapped `start` position.
    ///
    /// Fails with [`CyclicIntError::InvalidInterval`] on an empty list.
    pub fn cursor(&self, start: isize) -> Result<CyclicInt, CyclicIntError> {
        let len = i64::try_from(self.items.len())?;
        let interval = Interval::up_to(len)?;
        CyclicInt::in_interval(start, interval)
    }

    /// Replace the elements in `range` with `replace_with`, exactly like
    /// [`Vec::splice`], returning the removed elements.
    pub fn splice<R, I>(&mut self, range: R, replace_with: I) -> Vec<T>
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        self.items.splice(range, replace_with).collect()
    }

    /// Remove the elements in `range`, exactly like [`Vec::drain`].
    pub fn drain<R: RangeBounds<usize>>(&mut self, range: R) -> Vec<T> {
        self.items.drain(range).collect()
    }

    /// Iterate over the elements in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The elements as a plain slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the list, returning its storage.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    fn wrap_cyclic(&self, cursor: &CyclicInt) -> Option<usize> {
        let len = i64::try_from(self.items.len()).ok()?;
        if len == 0 {
            return None;
        }
        usize::try_from(cursor.value().rem_euclid(len)).ok()
    }
}

impl<T: Clone> CyclicList<T> {
    /// Copy the elements in `range` into a new list, like slicing a `Vec`.
    ///
    /// Panics if the range is out of bounds.
    pub fn slice<R>(&self, range: R) -> CyclicList<T>
    where
        R: std::slice::SliceIndex<[T], Output = [T]>,
    {
        Self {
            items: self.items[range].to_vec(),
        }
    }
}

impl<T> Index<isize> for CyclicList<T> {
    type Output = T;

    fn index(&self, position: isize) -> &T {
        match self.get(position) {
            Some(item) => item,
            None => panic!("index {position} out of range for empty CyclicList"),
        }
    }
}

impl<T> IndexMut<isize> for CyclicList<T> {
    fn index_mut(&mut self, position: isize) -> &mut T {
        match self.get_mut(position) {
            Some(item) => item,
            None => panic!("index {position} out of range for empty CyclicList"),
        }
    }
}

impl<T> From<Vec<T>> for CyclicList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> From<CyclicList<T>> for Vec<T> {
    fn from(list: CyclicList<T>) -> Self {
        list.items
    }
}

impl<T> FromIterator<T> for CyclicList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for CyclicList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a CyclicList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for CyclicList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.items == *other
    }
}
