//! String-keyed associative container.
//!
//! This module provides [`Dictionary`], a mapping from unique `String` keys
//! to values of any type, together with its iterators.
//!
//! # Two Operation Families
//!
//! Operations fall into exactly two groups and never mix:
//!
//! - Destructive: [`Dictionary::set`], [`Dictionary::update`],
//!   [`Dictionary::remove`] mutate the receiver and return `&mut Self`.
//! - Transformational: [`Dictionary::map`], [`Dictionary::filter`],
//!   [`Dictionary::partition`], [`Dictionary::union`],
//!   [`Dictionary::intersect`], [`Dictionary::diff`] leave their inputs alone
//!   and return a new dictionary.
//!
//! [`Dictionary::merge`] is the most general combinator: it folds over two
//! dictionaries and builds whatever the caller's accumulators build.
//!
//! # Value Sharing
//!
//! Values are stored behind a [`ReferenceCounter`]. A new dictionary produced
//! by a transformation points at the same values as its input.
//!
//! ```rust
//! use dictionary::dictionary::{Dictionary, ReferenceCounter};
//!
//! let original = Dictionary::singleton("config", vec![1, 2, 3]);
//! let copy = original.filter(|_, _| true);
//!
//! let left = original.get_shared("config").unwrap();
//! let right = copy.get_shared("config").unwrap();
//! assert!(ReferenceCounter::ptr_eq(&left, &right));
//! ```
//!
//! # Enumeration Order
//!
//! Entries enumerate in insertion order. Overwriting a key keeps its
//! position; removing a key keeps the relative order of the others.
//!
//! ```rust
//! use dictionary::Dictionary;
//!
//! let mut dictionary = Dictionary::from_entries([
//!     ("b".to_string(), 1),
//!     ("a".to_string(), 2),
//! ]);
//! dictionary.set("b", 10).set("c", 3);
//!
//! let keys: Vec<&str> = dictionary.keys().collect();
//! assert_eq!(keys, vec!["b", "a", "c"]);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer holding every stored value.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub type ReferenceCounter<T> = std::sync::Arc<T>;

/// Reference-counted smart pointer holding every stored value.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(not(feature = "arc"))]
pub type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Default Hash Builder
// =============================================================================

/// Hash builder used when none is named explicitly.
///
/// `fxhash` selects `rustc_hash::FxBuildHasher`, `ahash` selects
/// `ahash::RandomState`, otherwise the standard library's SipHash.
#[cfg(feature = "fxhash")]
pub type DefaultBuildHasher = rustc_hash::FxBuildHasher;

/// Hash builder used when none is named explicitly.
///
/// `fxhash` selects `rustc_hash::FxBuildHasher`, `ahash` selects
/// `ahash::RandomState`, otherwise the standard library's SipHash.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultBuildHasher = ahash::RandomState;

/// Hash builder used when none is named explicitly.
///
/// `fxhash` selects `rustc_hash::FxBuildHasher`, `ahash` selects
/// `ahash::RandomState`, otherwise the standard library's SipHash.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultBuildHasher = std::collections::hash_map::RandomState;

mod algebra;
mod iter;
mod store;
mod transform;

pub use iter::{Entries, IntoIter, Keys, Values};
pub use store::{Dictionary, Entry};

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::{Dictionary, ReferenceCounter};
    use rstest::rstest;

    #[rstest]
    fn test_shared_value_strong_count() {
        let original = Dictionary::singleton("key", 42);
        assert_eq!(
            ReferenceCounter::strong_count(&original.get_shared("key").unwrap()),
            2
        );

        let copy = original.clone();
        let shared = copy.get_shared("key").unwrap();
        assert_eq!(ReferenceCounter::strong_count(&shared), 3);

        drop(copy);
        assert_eq!(ReferenceCounter::strong_count(&shared), 2);
    }

    #[rstest]
    fn test_destructive_set_replaces_pointer() {
        let mut dictionary = Dictionary::singleton("key", 1);
        let before = dictionary.get_shared("key").unwrap();
        dictionary.set("key", 2);
        let after = dictionary.get_shared("key").unwrap();

        assert!(!ReferenceCounter::ptr_eq(&before, &after));
        assert_eq!(*before, 1);
        assert_eq!(*after, 2);
    }
}
