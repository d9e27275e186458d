//! Set algebra and the generalized merge.

use std::hash::BuildHasher;

use super::{Dictionary, ReferenceCounter};

impl<V, S: BuildHasher + Clone> Dictionary<V, S> {
    /// Combines two dictionaries. On a key collision the value from `self`
    /// is kept.
    ///
    /// Keys of `self` come first in enumeration order, followed by the keys
    /// only `right` has.
    ///
    /// # Complexity
    ///
    /// O(n + m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionary::Dictionary;
    ///
    /// let left = Dictionary::from_entries([("a", 1), ("b", 2)]);
    /// let right = Dictionary::from_entries([("b", 18), ("c", 9)]);
    ///
    /// assert_eq!(
    ///     left.union(&right),
    ///     Dictionary::from_entries([("a", 1), ("b", 2), ("c", 9)])
    /// );
    /// ```
    #[must_use]
    pub fn union<S2: BuildHasher>(&self, right: &Dictionary<V, S2>) -> Self {
        let mut union = self.clone();
        for (key, value) in right.shared_entries() {
            if !union.has(key) {
                union.insert_shared(key.clone(), ReferenceCounter::clone(value));
            }
        }
        union
    }

    /// Keeps the entries of `self` whose keys `right` also has.
    ///
    /// Only membership in `right` is consulted, so its value type is free.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionary::Dictionary;
    ///
    /// let left = Dictionary::from_entries([("a", 1), ("b", 2)]);
    /// let right = Dictionary::from_entries([("b", "eighteen"), ("c", "nine")]);
    ///
    /// assert_eq!(left.intersect(&right), Dictionary::singleton("b", 2));
    /// ```
    #[must_use]
    pub fn intersect<W, S2: BuildHasher>(&self, right: &Dictionary<W, S2>) -> Self {
        self.filter(|key, _| right.has(key))
    }

    /// Keeps the entries of `self` whose keys `right` does not have.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionary::Dictionary;
    ///
    /// let left = Dictionary::from_entries([("a", 1), ("b", 2)]);
    /// let right = Dictionary::from_entries([("b", 18), ("c", 9)]);
    ///
    /// assert_eq!(left.diff(&right), Dictionary::singleton("a", 1));
    /// ```
    #[must_use]
    pub fn diff<W, S2: BuildHasher>(&self, right: &Dictionary<W, S2>) -> Self {
        self.filter(|key, _| !right.has(key))
    }
}

impl<V, S: BuildHasher> Dictionary<V, S> {
    /// The most general way of combining two dictionaries.
    ///
    /// Three accumulators fold over the keys:
    ///
    /// 1. every key of `self`, in order, goes to `accumulate_both` when
    ///    `right` has it too and to `accumulate_left` otherwise;
    /// 2. then every key only `right` has, in `right`'s order, goes to
    ///    `accumulate_right`.
    ///
    /// No dictionary is built here; the result is whatever the accumulators
    /// build from `initial`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionary::Dictionary;
    ///
    /// let left = Dictionary::from_entries([("a", 1), ("b", 2)]);
    /// let right = Dictionary::from_entries([("b", 18), ("c", 9)]);
    ///
    /// let log = left.merge(
    ///     &right,
    ///     Vec::new(),
    ///     |key, left, mut log| {
    ///         log.push(format!("- {key}:{left}"));
    ///         log
    ///     },
    ///     |key, left, right, mut log| {
    ///         log.push(format!("= {key}:{left}->{right}"));
    ///         log
    ///     },
    ///     |key, right, mut log| {
    ///         log.push(format!("+ {key}:{right}"));
    ///         log
    ///     },
    /// );
    ///
    /// assert_eq!(log, vec!["- a:1", "= b:2->18", "+ c:9"]);
    /// ```
    pub fn merge<W, S2, R, LeftOnly, Both, RightOnly>(
        &self,
        right: &Dictionary<W, S2>,
        initial: R,
        mut accumulate_left: LeftOnly,
        mut accumulate_both: Both,
        mut accumulate_right: RightOnly,
    ) -> R
    where
        S2: BuildHasher,
        LeftOnly: FnMut(&str, &V, R) -> R,
        Both: FnMut(&str, &V, &W, R) -> R,
        RightOnly: FnMut(&str, &W, R) -> R,
    {
        let mut state = initial;
        let mut both_count: usize = 0;

        for (key, left_value) in self.entries() {
            state = match right.get(key) {
                Some(right_value) => {
                    both_count += 1;
                    accumulate_both(key, left_value, right_value, state)
                }
                None => accumulate_left(key, left_value, state),
            };
        }

        for (key, right_value) in right.entries() {
            if !self.has(key) {
                state = accumulate_right(key, right_value, state);
            }
        }

        tracing::trace!(
            left_only = self.len() - both_count,
            both = both_count,
            right_only = right.len() - both_count,
            "merged dictionaries"
        );
        state
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

#[cfg(feature = "typeclass")]
mod typeclass_instances {
    use std::hash::BuildHasher;

    use super::super::Dictionary;
    use crate::typeclass::{Foldable, Monoid, Semigroup, TypeConstructor};

    /// A dictionary is a container of its values; the key type is fixed to
    /// `String`.
    impl<V, S> TypeConstructor for Dictionary<V, S> {
        type Inner = V;
        type WithType<B> = Dictionary<B, S>;
    }

    impl<V: Clone, S> Foldable for Dictionary<V, S> {
        fn fold_left<B, F>(self, init: B, mut function: F) -> B
        where
            F: FnMut(B, V) -> B,
        {
            self.into_iter()
                .fold(init, |accumulator, (_, value)| function(accumulator, value))
        }

        fn fold_right<B, F>(self, init: B, mut function: F) -> B
        where
            F: FnMut(V, B) -> B,
        {
            self.into_iter()
                .rev()
                .fold(init, |accumulator, (_, value)| function(value, accumulator))
        }

        #[inline]
        fn is_empty(&self) -> bool {
            self.len() == 0
        }

        #[inline]
        fn length(&self) -> usize {
            self.len()
        }
    }

    /// Left-biased union.
    impl<V, S: BuildHasher + Clone> Semigroup for Dictionary<V, S> {
        fn combine(self, other: Self) -> Self {
            self.union(&other)
        }

        fn combine_ref(&self, other: &Self) -> Self {
            self.union(other)
        }
    }

    impl<V, S: BuildHasher + Clone + Default> Monoid for Dictionary<V, S> {
        fn empty() -> Self {
            Self::default()
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn left() -> Dictionary<i32> {
        Dictionary::from_entries([("a", 1), ("b", 2)])
    }

    fn right() -> Dictionary<i32> {
        Dictionary::from_entries([("b", 18), ("c", 9)])
    }

    #[rstest]
    fn test_union_enumeration_order() {
        let union = left().union(&right());
        assert_eq!(union.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[rstest]
    fn test_intersect_keeps_left_values() {
        assert_eq!(left().intersect(&right()), Dictionary::singleton("b", 2));
    }

    #[rstest]
    fn test_diff_keeps_left_only() {
        assert_eq!(left().diff(&right()), Dictionary::singleton("a", 1));
    }

    #[rstest]
    fn test_set_algebra_with_empty() {
        let empty: Dictionary<i32> = Dictionary::empty();
        assert_eq!(left().union(&empty), left());
        assert_eq!(empty.union(&left()), left());
        assert!(left().intersect(&empty).is_empty());
        assert_eq!(left().diff(&empty), left());
    }

    #[rstest]
    fn test_merge_with_different_value_types() {
        let names = Dictionary::from_entries([("a", "alpha"), ("b", "beta")]);
        let counts = Dictionary::from_entries([("b", 2_usize), ("c", 3)]);
        let total = names.merge(
            &counts,
            0,
            |_, name, total| total + name.len(),
            |_, name, count, total| total + name.len() * count,
            |_, count, total| total + count,
        );
        assert_eq!(total, 5 + 4 * 2 + 3);
    }

    #[rstest]
    fn test_merge_does_not_touch_inputs() {
        let left = left();
        let right = right();
        let _ = left.merge(
            &right,
            (),
            |_, _, state| state,
            |_, _, _, state| state,
            |_, _, state| state,
        );
        assert_eq!(left, Dictionary::from_entries([("a", 1), ("b", 2)]));
        assert_eq!(right, Dictionary::from_entries([("b", 18), ("c", 9)]));
    }
}
