//! Sequence<T>: contiguous, growable, index-addressable storage.
//!
//! Growth doubles the current capacity whenever an append or insert finds
//! the buffer full; capacity never shrinks, and `clear` keeps the backing
//! buffer. Out-of-range indices are recoverable caller errors reported
//! through `Option`/`bool` results and never touch the stored elements.
//!
//! Equality-based operations (`index_of`, `contains`, `remove_element`)
//! require `T: PartialEq`; `display` requires `T: Render`. Elements are
//! owned: dropping the sequence drops them, nested containers included.

use crate::render::Render;
use core::fmt;

/// Initial capacity used by [`Sequence::new`].
pub const DEFAULT_CAPACITY: usize = 10;

pub struct Sequence<T> {
    data: Vec<T>,
}

impl<T> Sequence<T> {
    /// New empty sequence with the default initial capacity (10).
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// New empty sequence with an explicit initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    // Doubles capacity when the buffer is full so growth stays on the
    // doubling schedule instead of the allocator's own policy. A
    // zero-capacity buffer grows to one.
    fn grow_if_full(&mut self) {
        if self.data.len() == self.data.capacity() {
            self.data.reserve_exact(self.data.capacity().max(1));
        }
    }

    /// Append at the end, doubling capacity when full. Amortized O(1).
    pub fn push(&mut self, value: T) {
        self.grow_if_full();
        self.data.push(value);
    }

    /// Remove and return the last element, `None` on an empty sequence.
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Read-only access to the element at `index`, `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Read-only access to the last element, `None` on an empty sequence.
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Overwrite the element at `index` in place. Returns whether the
    /// index was in range; an out-of-range index leaves the sequence
    /// unchanged.
    pub fn set(&mut self, index: usize, value: T) -> bool {
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Insert at `index`, shifting trailing elements right. Valid for
    /// `index <= len` (appending at the end is permitted); returns whether
    /// the insert happened.
    pub fn insert(&mut self, index: usize, value: T) -> bool {
        if index > self.data.len() {
            return false;
        }
        self.grow_if_full();
        self.data.insert(index, value);
        true
    }

    /// Remove the element at `index`, shifting trailing elements left.
    /// Returns the removed element, `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.data.len() {
            Some(self.data.remove(index))
        } else {
            None
        }
    }

    /// Reset the length to zero. Capacity and the backing buffer are
    /// retained; the removed elements are dropped.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Forward iterator over the elements in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            it: self.data.iter(),
        }
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Index of the first element equal to `value`, by linear scan.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.data.iter().position(|e| e == value)
    }

    /// Remove the first element equal to `value`. Returns whether a
    /// removal occurred.
    pub fn remove_element(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => {
                self.data.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }
}

impl<T: Render> Sequence<T> {
    /// Render as a bracketed, comma-separated, insertion-order list:
    /// `[e1, e2, e3]`.
    pub fn display(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str("[")?;
        for (i, element) in self.data.iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            element.render(out)?;
        }
        out.write_str("]")
    }
}

impl<T: Render> Render for Sequence<T> {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.display(out)
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over a sequence's elements in index order.
pub struct Iter<'a, T> {
    it: core::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
