//! Transformations: remapping, filtering and partitioning.
//!
//! Every function here borrows its input and returns a new dictionary.
//! Values that pass through unchanged are shared with the input.

use std::hash::BuildHasher;

use super::{Dictionary, ReferenceCounter};
use crate::error::DictionaryError;

impl<V, S: BuildHasher + Clone> Dictionary<V, S> {
    /// Builds a new dictionary by applying `function` to every entry.
    ///
    /// Results are inserted in enumeration order. When two entries map to
    /// the same key the later one silently replaces the earlier one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionary::Dictionary;
    ///
    /// let before = Dictionary::from_entries([("a", 1), ("b", 2)]);
    /// let after = before.map(|key, value| (key.to_uppercase(), (value + 5).to_string()));
    ///
    /// assert_eq!(
    ///     after,
    ///     Dictionary::from_entries([("A", "6".to_string()), ("B", "7".to_string())])
    /// );
    /// assert_eq!(before.len(), 2);
    /// ```
    #[must_use]
    pub fn map<W, F>(&self, mut function: F) -> Dictionary<W, S>
    where
        F: FnMut(&str, &V) -> (String, W),
    {
        let mut mapped = self.empty_like(self.len());
        for (key, value) in self.entries() {
            let (new_key, new_value) = function(key, value);
            mapped.set(new_key, new_value);
        }
        mapped
    }

    /// Fallible form of [`Dictionary::map`]. Stops at the first failure.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Callback`] naming the key whose mapping
    /// failed.
    pub fn try_map<W, E, F>(&self, mut function: F) -> Result<Dictionary<W, S>, DictionaryError<E>>
    where
        F: FnMut(&str, &V) -> Result<(String, W), E>,
    {
        let mut mapped = self.empty_like(self.len());
        for (key, value) in self.entries() {
            let (new_key, new_value) =
                function(key, value).map_err(|source| DictionaryError::Callback {
                    key: key.to_owned(),
                    source,
                })?;
            mapped.set(new_key, new_value);
        }
        Ok(mapped)
    }

    /// Builds a new dictionary with the same keys and transformed values.
    ///
    /// ```rust
    /// use dictionary::Dictionary;
    ///
    /// let lengths = Dictionary::singleton("word", "hello").map_values(|value| value.len());
    /// assert_eq!(lengths.get("word"), Some(&5));
    /// ```
    #[must_use]
    pub fn map_values<W, F>(&self, mut function: F) -> Dictionary<W, S>
    where
        F: FnMut(&V) -> W,
    {
        let mut mapped = self.empty_like(self.len());
        for (key, value) in self.shared_entries() {
            mapped.insert_shared(key.clone(), ReferenceCounter::new(function(&**value)));
        }
        mapped
    }

    /// Keeps the entries that satisfy `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionary::Dictionary;
    ///
    /// let before = Dictionary::from_entries([("a", -1), ("b", 2)]);
    /// let after = before.filter(|_, value| *value > 0);
    ///
    /// assert_eq!(after, Dictionary::singleton("b", 2));
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&str, &V) -> bool,
    {
        let mut filtered = self.empty_like(0);
        for (key, value) in self.shared_entries() {
            if predicate(key.as_str(), &**value) {
                filtered.insert_shared(key.clone(), ReferenceCounter::clone(value));
            }
        }
        filtered
    }

    /// Splits the entries into those that satisfy `predicate` and the rest.
    ///
    /// Every entry lands in exactly one of the two dictionaries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionary::Dictionary;
    ///
    /// let all = Dictionary::from_entries([("a", -1), ("b", 2)]);
    /// let (positive, negative) = all.partition(|_, value| *value > 0);
    ///
    /// assert_eq!(positive, Dictionary::singleton("b", 2));
    /// assert_eq!(negative, Dictionary::singleton("a", -1));
    /// ```
    #[must_use]
    pub fn partition<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&str, &V) -> bool,
    {
        let mut matching = self.empty_like(0);
        let mut rest = self.empty_like(0);
        for (key, value) in self.shared_entries() {
            let target = if predicate(key.as_str(), &**value) {
                &mut matching
            } else {
                &mut rest
            };
            target.insert_shared(key.clone(), ReferenceCounter::clone(value));
        }
        (matching, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_map_collision_later_entry_wins() {
        let dictionary = Dictionary::from_entries([("a", 1), ("A", 2)]);
        let mapped = dictionary.map(|key, value| (key.to_uppercase(), *value));
        assert_eq!(mapped, Dictionary::singleton("A", 2));
    }

    #[rstest]
    fn test_map_collision_follows_enumeration_order() {
        let dictionary = Dictionary::from_entries([("A", 2), ("a", 1)]);
        let mapped = dictionary.map(|key, value| (key.to_uppercase(), *value));
        assert_eq!(mapped, Dictionary::singleton("A", 1));
    }

    #[rstest]
    fn test_try_map_reports_failing_key() {
        let dictionary = Dictionary::from_entries([("ok", "1"), ("bad", "x")]);
        let result = dictionary.try_map(|key, value| {
            value
                .parse::<i32>()
                .map(|number| (key.to_owned(), number))
        });
        match result {
            Err(DictionaryError::Callback { key, .. }) => assert_eq!(key, "bad"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[rstest]
    fn test_try_map_success() {
        let dictionary = Dictionary::from_entries([("a", "1"), ("b", "2")]);
        let parsed = dictionary
            .try_map(|key, value| value.parse::<i32>().map(|number| (key.to_owned(), number)))
            .unwrap();
        assert_eq!(parsed, Dictionary::from_entries([("a", 1), ("b", 2)]));
    }

    #[rstest]
    fn test_filter_shares_values() {
        let dictionary = Dictionary::from_entries([("keep", vec![1]), ("drop", vec![2])]);
        let filtered = dictionary.filter(|key, _| key == "keep");

        assert_eq!(filtered.len(), 1);
        assert!(ReferenceCounter::ptr_eq(
            &dictionary.get_shared("keep").unwrap(),
            &filtered.get_shared("keep").unwrap()
        ));
    }

    #[rstest]
    fn test_partition_preserves_order_in_each_half() {
        let dictionary = Dictionary::from_entries([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
        let (even, odd) = dictionary.partition(|_, value| value % 2 == 0);

        assert_eq!(even.keys().collect::<Vec<_>>(), vec!["b", "d"]);
        assert_eq!(odd.keys().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[rstest]
    fn test_transformations_leave_input_untouched() {
        let dictionary = Dictionary::from_entries([("a", 1), ("b", 2)]);
        let _ = dictionary.map(|key, value| (key.to_owned(), value * 100));
        let _ = dictionary.filter(|_, _| false);
        let _ = dictionary.partition(|_, _| true);
        assert_eq!(dictionary, Dictionary::from_entries([("a", 1), ("b", 2)]));
    }
}
