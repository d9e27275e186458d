//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use dictionary::Dictionary;
/// use dictionary::typeclass::Semigroup;
///
/// let left = Dictionary::from_entries([("a", 1), ("b", 2)]);
/// let right = Dictionary::from_entries([("b", 18), ("c", 9)]);
///
/// // Left-biased: "b" keeps the value from `left`
/// assert_eq!(
///     left.combine(right),
///     Dictionary::from_entries([("a", 1), ("b", 2), ("c", 9)])
/// );
/// ```
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements with `combine`, or `None` for an empty input.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}
