//! Foldable type class - folding over data structures.
//!
//! For a dictionary the elements are its values, visited in enumeration
//! order by `fold_left` and in reverse by `fold_right`.

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A type class for data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
///
/// # Examples
///
/// ```rust
/// use dictionary::Dictionary;
/// use dictionary::typeclass::Foldable;
///
/// let stock = Dictionary::from_entries([("apples", 3), ("pears", 4)]);
/// assert_eq!(stock.clone().fold_left(0, |total, count| total + count), 7);
/// assert!(stock.exists(|count| *count > 3));
/// assert!(stock.for_all(|count| *count > 0));
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a `Monoid` and combines all results.
    ///
    /// ```rust
    /// use dictionary::Dictionary;
    /// use dictionary::typeclass::Foldable;
    ///
    /// let tags = Dictionary::from_entries([("a", "x"), ("b", "y")]);
    /// let joined: String = tags.fold_map(|tag| tag.to_string());
    /// assert_eq!(joined, "xy");
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec` in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element satisfying `predicate`.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |found, element| {
            if found.is_some() {
                found
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Checks if any element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Checks if every element satisfies `predicate`. True when empty.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}
