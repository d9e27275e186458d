//! Tests for the fast hash feature flags.
//!
//! `fxhash` and `ahash` only change the default hash builder. Lookups,
//! enumeration order and set algebra must behave the same under each one.

use dictionary::Dictionary;
use dictionary::dictionary::DefaultBuildHasher;
use rstest::rstest;
use std::collections::hash_map::RandomState;

// =============================================================================
// Default Hasher Behavior
// =============================================================================

#[rstest]
fn test_lookup_with_default_hasher() {
    let dictionary: Dictionary<i32, DefaultBuildHasher> =
        Dictionary::from_entries([("key", 1), ("other", 2)]);

    assert_eq!(dictionary.get("key"), Some(&1));
    assert_eq!(dictionary.get("other"), Some(&2));
    assert_eq!(dictionary.get("missing"), None);
}

#[rstest]
fn test_enumeration_order_does_not_depend_on_hasher() {
    let words = ["delta", "alpha", "gamma", "beta", "epsilon"];
    let dictionary: Dictionary<usize> = words.iter().map(|word| (*word, word.len())).collect();

    assert_eq!(dictionary.keys().collect::<Vec<_>>(), words.to_vec());
}

#[rstest]
fn test_large_dictionary_lookups() {
    let dictionary: Dictionary<usize> = (0..1_000).map(|index| (format!("key-{index}"), index)).collect();

    assert_eq!(dictionary.len(), 1_000);
    for index in (0..1_000).step_by(37) {
        assert_eq!(dictionary.get(&format!("key-{index}")), Some(&index));
    }
}

// =============================================================================
// Explicit Hash Builders
// =============================================================================

#[rstest]
fn test_explicit_std_hasher() {
    let mut dictionary: Dictionary<i32, RandomState> = Dictionary::with_hasher(RandomState::new());
    dictionary.set("a", 1).set("b", 2);

    let filtered = dictionary.filter(|_, value| *value > 1);
    assert_eq!(filtered.keys().collect::<Vec<_>>(), vec!["b"]);
}

#[rstest]
fn test_set_algebra_across_hashers() {
    let mut left: Dictionary<i32, RandomState> = Dictionary::with_hasher(RandomState::new());
    left.set("a", 1).set("b", 2);
    let right: Dictionary<i32> = Dictionary::from_entries([("b", 18), ("c", 9)]);

    let union = left.union(&right);
    assert_eq!(union.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(union.get("b"), Some(&2));

    assert_eq!(left.intersect(&right).keys().collect::<Vec<_>>(), vec!["b"]);
    assert_eq!(left.diff(&right).keys().collect::<Vec<_>>(), vec!["a"]);
}

#[cfg(feature = "fxhash")]
#[rstest]
fn test_fxhash_builder_is_default() {
    let dictionary: Dictionary<i32, rustc_hash::FxBuildHasher> =
        Dictionary::from_entries([("a", 1)]);
    assert!(dictionary.has("a"));
}

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
#[rstest]
fn test_ahash_builder_is_default() {
    let dictionary: Dictionary<i32, ahash::RandomState> = Dictionary::from_entries([("a", 1)]);
    assert!(dictionary.has("a"));
}
