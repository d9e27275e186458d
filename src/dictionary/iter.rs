//! Iterators over a [`Dictionary`](super::Dictionary).
//!
//! Each iterator is lazy, finite and single-pass. Asking the dictionary for
//! another iterator starts a new, independent pass.

use std::iter::FusedIterator;

use indexmap::map;

use super::ReferenceCounter;

// =============================================================================
// Entries
// =============================================================================

/// An iterator over `(key, value)` pairs of a dictionary.
///
/// Created by [`Dictionary::entries`](super::Dictionary::entries).
pub struct Entries<'a, V> {
    inner: map::Iter<'a, String, ReferenceCounter<V>>,
}

impl<'a, V> Entries<'a, V> {
    pub(super) const fn new(inner: map::Iter<'a, String, ReferenceCounter<V>>) -> Self {
        Self { inner }
    }
}

impl<'a, V> Iterator for Entries<'a, V> {
    type Item = (&'a str, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, value)| (key.as_str(), &**value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Entries<'_, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> FusedIterator for Entries<'_, V> {}

// =============================================================================
// Keys
// =============================================================================

/// An iterator over the keys of a dictionary.
///
/// Created by [`Dictionary::keys`](super::Dictionary::keys).
pub struct Keys<'a, V> {
    inner: map::Keys<'a, String, ReferenceCounter<V>>,
}

impl<'a, V> Keys<'a, V> {
    pub(super) const fn new(inner: map::Keys<'a, String, ReferenceCounter<V>>) -> Self {
        Self { inner }
    }
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> FusedIterator for Keys<'_, V> {}

// =============================================================================
// Values
// =============================================================================

/// An iterator over the values of a dictionary.
///
/// Created by [`Dictionary::values`](super::Dictionary::values).
pub struct Values<'a, V> {
    inner: map::Values<'a, String, ReferenceCounter<V>>,
}

impl<'a, V> Values<'a, V> {
    pub(super) const fn new(inner: map::Values<'a, String, ReferenceCounter<V>>) -> Self {
        Self { inner }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|value| &**value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> FusedIterator for Values<'_, V> {}

// =============================================================================
// IntoIter
// =============================================================================

/// An owning iterator over `(key, value)` pairs of a dictionary.
///
/// A value still shared with another dictionary is cloned; otherwise it is
/// moved out.
pub struct IntoIter<V> {
    inner: map::IntoIter<String, ReferenceCounter<V>>,
}

impl<V> IntoIter<V> {
    pub(super) const fn new(inner: map::IntoIter<String, ReferenceCounter<V>>) -> Self {
        Self { inner }
    }
}

impl<V: Clone> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, value)| (key, ReferenceCounter::unwrap_or_clone(value)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V: Clone> DoubleEndedIterator for IntoIter<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(key, value)| (key, ReferenceCounter::unwrap_or_clone(value)))
    }
}

impl<V: Clone> ExactSizeIterator for IntoIter<V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V: Clone> FusedIterator for IntoIter<V> {}
