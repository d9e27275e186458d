//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use dictionary::Dictionary;
/// use dictionary::typeclass::{Monoid, Semigroup};
///
/// let dictionary = Dictionary::singleton("a", 1);
/// let identity: Dictionary<i32> = Monoid::empty();
///
/// assert_eq!(identity.combine_ref(&dictionary), dictionary);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines all elements, starting from the identity element.
    ///
    /// ```rust
    /// use dictionary::Dictionary;
    /// use dictionary::typeclass::Monoid;
    ///
    /// let none: Vec<Dictionary<i32>> = Vec::new();
    /// assert!(Dictionary::combine_all(none).is_empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(<Self as Monoid>::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}
