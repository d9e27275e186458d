//! The [`Dictionary`] type: representation, constructors, accessors and
//! destructive mutators.

use std::fmt;
use std::hash::BuildHasher;
use std::ops::Index;

use indexmap::IndexMap;

use super::iter::{Entries, IntoIter, Keys, Values};
use super::{DefaultBuildHasher, ReferenceCounter};
use crate::error::DictionaryError;

/// A `(key, value)` pair, the unit exchanged with constructors.
pub type Entry<V> = (String, V);

// =============================================================================
// Dictionary Definition
// =============================================================================

/// A mapping from unique `String` keys to values of type `V`.
///
/// Membership is the only existence signal: a key is either present (mapped
/// to some value, which may itself be `None` when `V = Option<T>`) or absent.
///
/// # Time Complexity
///
/// | Operation                        | Complexity          |
/// |----------------------------------|---------------------|
/// | `has`, `get`, `get_or`           | O(1) average        |
/// | `set`, `update` (insert/replace) | O(1) average        |
/// | `remove`, `update` (delete)      | O(n)                |
/// | `map`, `filter`, `partition`     | O(n)                |
/// | `union`, `intersect`, `diff`     | O(n + m)            |
/// | `merge`                          | O(n + m)            |
///
/// Removal shifts the following entries to keep enumeration order intact.
///
/// # Examples
///
/// ```rust
/// use dictionary::Dictionary;
///
/// let animals = Dictionary::from_entries([("Tom", "Cat"), ("Jerry", "Mouse")]);
///
/// assert_eq!(animals.get_or("Tom", &""), &"Cat");
/// assert_eq!(animals.get_or("Spike", &""), &"");
/// ```
pub struct Dictionary<V, S = DefaultBuildHasher> {
    table: IndexMap<String, ReferenceCounter<V>, S>,
}

impl<V> Dictionary<V> {
    /// Creates an empty dictionary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionary::Dictionary;
    ///
    /// let mut dictionary = Dictionary::empty();
    /// dictionary.set("Jack", 1);
    /// assert_eq!(dictionary.get("Jack"), Some(&1));
    /// ```
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::with_hasher(DefaultBuildHasher::default())
    }

    /// Creates an empty dictionary with room for at least `capacity` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultBuildHasher::default())
    }

    /// Creates a dictionary with exactly one entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::singleton("Zoe", 15);
    /// assert_eq!(dictionary.len(), 1);
    /// assert_eq!(dictionary.get("Zoe"), Some(&15));
    /// ```
    #[must_use]
    pub fn singleton(key: impl Into<String>, value: V) -> Self {
        let mut dictionary = Self::with_capacity(1);
        dictionary.set(key, value);
        dictionary
    }

    /// Builds a dictionary from `(key, value)` pairs.
    ///
    /// The input is consumed exactly once. When a key repeats, the later
    /// pair overwrites the earlier one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_entries([("Zoe", 17), ("Sandro", 18), ("Zoe", 20)]);
    ///
    /// assert_eq!(dictionary.len(), 2);
    /// assert_eq!(dictionary.get("Zoe"), Some(&20));
    /// ```
    #[must_use]
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        entries.into_iter().collect()
    }

    /// Builds a dictionary from a fallible source of `(key, value)` pairs.
    ///
    /// Reading stops at the first `Err`, which is returned inside
    /// [`DictionaryError::Iteration`] together with the number of pairs read
    /// before it.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Iteration`] if the source yields an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionary::{Dictionary, DictionaryError};
    ///
    /// let source = vec![Ok(("a", 1)), Err("truncated"), Ok(("b", 2))];
    /// let result = Dictionary::try_from_entries(source);
    ///
    /// assert!(matches!(
    ///     result,
    ///     Err(DictionaryError::Iteration { consumed: 1, source: "truncated" })
    /// ));
    /// ```
    pub fn try_from_entries<K, E, I>(entries: I) -> Result<Self, DictionaryError<E>>
    where
        K: Into<String>,
        I: IntoIterator<Item = Result<(K, V), E>>,
    {
        let mut dictionary = Self::empty();
        let mut consumed = 0;
        for entry in entries {
            let (key, value) =
                entry.map_err(|source| DictionaryError::Iteration { consumed, source })?;
            dictionary.set(key, value);
            consumed += 1;
        }
        tracing::trace!(consumed, distinct = dictionary.len(), "built dictionary from fallible entries");
        Ok(dictionary)
    }
}

impl<V, S> Dictionary<V, S> {
    /// Creates an empty dictionary that hashes keys with `hash_builder`.
    #[inline]
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            table: IndexMap::with_hasher(hash_builder),
        }
    }

    /// Creates an empty dictionary with room for `capacity` entries that
    /// hashes keys with `hash_builder`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            table: IndexMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the dictionary has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns a fresh iterator over `(key, value)` pairs.
    ///
    /// Every call yields an independent, single-pass iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::singleton("Car", "blue");
    /// for (key, value) in dictionary.entries() {
    ///     assert_eq!((key, *value), ("Car", "blue"));
    /// }
    /// ```
    #[must_use]
    pub fn entries(&self) -> Entries<'_, V> {
        Entries::new(self.table.iter())
    }

    /// Returns a fresh iterator over keys.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, V> {
        Keys::new(self.table.keys())
    }

    /// Returns a fresh iterator over values.
    ///
    /// ```rust
    /// use dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_entries([("a", 1), ("b", 2)]);
    /// let sum: i32 = dictionary.values().sum();
    /// assert_eq!(sum, 3);
    /// ```
    #[must_use]
    pub fn values(&self) -> Values<'_, V> {
        Values::new(self.table.values())
    }

    /// Removes every entry, keeping the same dictionary.
    pub fn clear(&mut self) -> &mut Self {
        self.table.clear();
        self
    }

    pub(crate) fn shared_entries(
        &self,
    ) -> impl Iterator<Item = (&String, &ReferenceCounter<V>)> + '_ {
        self.table.iter()
    }

    pub(crate) fn insert_shared(&mut self, key: String, value: ReferenceCounter<V>)
    where
        S: BuildHasher,
    {
        self.table.insert(key, value);
    }
}

impl<V, S: BuildHasher> Dictionary<V, S> {
    /// Returns `true` if `key` is a member of the dictionary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::singleton("a", 1);
    /// assert!(dictionary.has("a"));
    /// assert!(!dictionary.has("b"));
    /// ```
    #[inline]
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    /// Returns the value stored under `key`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.table.get(key).map(|value| &**value)
    }

    /// Returns the value stored under `key`, or `fallback` when the key is
    /// absent. Never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionary::Dictionary;
    ///
    /// let animals = Dictionary::from_entries([("Tom", Some("Cat"))]);
    ///
    /// assert_eq!(animals.get_or("Tom", &None), &Some("Cat"));
    /// assert_eq!(animals.get_or("Spike", &None), &None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, fallback: &'a V) -> &'a V {
        self.get(key).unwrap_or(fallback)
    }

    /// Returns the shared pointer to the value stored under `key`.
    ///
    /// Dictionaries derived from this one through transformations hold the
    /// same pointer, which `ReferenceCounter::ptr_eq` can confirm.
    #[must_use]
    pub fn get_shared(&self, key: &str) -> Option<ReferenceCounter<V>> {
        self.table.get(key).cloned()
    }

    /// Inserts `value` under `key`, replacing any previous value.
    ///
    /// This mutates the dictionary and returns it for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionary::Dictionary;
    ///
    /// let mut dictionary = Dictionary::singleton("a", 1);
    /// dictionary.set("b", 2).set("b", 15);
    ///
    /// assert_eq!(dictionary, Dictionary::from_entries([("a", 1), ("b", 15)]));
    /// ```
    pub fn set(&mut self, key: impl Into<String>, value: V) -> &mut Self {
        self.table.insert(key.into(), ReferenceCounter::new(value));
        self
    }

    /// Inserts, replaces or removes the entry under `key` using `updater`.
    ///
    /// `updater` receives the current value, or `None` when the key is
    /// absent. Returning `Some(value)` stores `value`; returning `None`
    /// removes the key if present and does nothing otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionary::Dictionary;
    ///
    /// let mut dictionary = Dictionary::from_entries([("a", 1), ("b", 2)]);
    /// let increment = |value: Option<&i32>| Some(value.map_or(0, |value| value + 1));
    ///
    /// dictionary.update("c", increment).update("b", increment);
    /// assert_eq!(dictionary, Dictionary::from_entries([("a", 1), ("b", 3), ("c", 0)]));
    ///
    /// dictionary.update("b", |_| None).update("d", |_| None);
    /// assert_eq!(dictionary, Dictionary::from_entries([("a", 1), ("c", 0)]));
    /// ```
    pub fn update<F>(&mut self, key: &str, updater: F) -> &mut Self
    where
        F: FnOnce(Option<&V>) -> Option<V>,
    {
        let replacement = updater(self.get(key));
        self.apply_update(key, replacement);
        self
    }

    /// Fallible form of [`Dictionary::update`].
    ///
    /// When `updater` fails the dictionary is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Callback`] carrying the updater's error.
    pub fn try_update<F, E>(&mut self, key: &str, updater: F) -> Result<&mut Self, DictionaryError<E>>
    where
        F: FnOnce(Option<&V>) -> Result<Option<V>, E>,
    {
        let replacement = updater(self.get(key)).map_err(|source| DictionaryError::Callback {
            key: key.to_owned(),
            source,
        })?;
        self.apply_update(key, replacement);
        Ok(self)
    }

    fn apply_update(&mut self, key: &str, replacement: Option<V>) {
        let outcome = match replacement {
            Some(value) => {
                if let Some(slot) = self.table.get_mut(key) {
                    *slot = ReferenceCounter::new(value);
                    "replaced"
                } else {
                    self.table.insert(key.to_owned(), ReferenceCounter::new(value));
                    "inserted"
                }
            }
            None => {
                if self.table.shift_remove(key).is_some() {
                    "removed"
                } else {
                    "unchanged"
                }
            }
        };
        tracing::trace!(key, outcome, "updated dictionary entry");
    }

    /// Removes the entry under `key`. Absent keys are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dictionary::Dictionary;
    ///
    /// let mut dictionary = Dictionary::from_entries([("a", 1), ("b", 2)]);
    /// dictionary.remove("a").remove("c");
    /// assert_eq!(dictionary, Dictionary::singleton("b", 2));
    /// ```
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.table.shift_remove(key);
        self
    }
}

impl<V, S: Clone> Dictionary<V, S> {
    /// Creates an empty dictionary of another value type sharing this
    /// dictionary's hash builder.
    pub(crate) fn empty_like<W>(&self, capacity: usize) -> Dictionary<W, S> {
        Dictionary::with_capacity_and_hasher(capacity, self.table.hasher().clone())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<V, S: Clone> Clone for Dictionary<V, S> {
    /// Returns a new dictionary sharing every value with `self`.
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<V, S: Default> Default for Dictionary<V, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> FromIterator<(K, V)> for Dictionary<V, S>
where
    K: Into<String>,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Self::default();
        dictionary.extend(iter);
        dictionary
    }
}

impl<K, V, S> Extend<(K, V)> for Dictionary<V, S>
where
    K: Into<String>,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let mut consumed: usize = 0;
        let before = self.len();
        for (key, value) in iter {
            self.set(key, value);
            consumed += 1;
        }
        tracing::trace!(
            consumed,
            overwritten = consumed - (self.len() - before),
            "extended dictionary"
        );
    }
}

impl<V: Clone, S> IntoIterator for Dictionary<V, S> {
    type Item = Entry<V>;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.table.into_iter())
    }
}

impl<'a, V, S> IntoIterator for &'a Dictionary<V, S> {
    type Item = (&'a str, &'a V);
    type IntoIter = Entries<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

impl<V: PartialEq, S: BuildHasher> PartialEq for Dictionary<V, S> {
    /// Two dictionaries are equal when they hold the same keys with equal
    /// values, regardless of enumeration order.
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
    }
}

impl<V: Eq, S: BuildHasher> Eq for Dictionary<V, S> {}

impl<V, S: BuildHasher> Index<&str> for Dictionary<V, S> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is absent.
    fn index(&self, key: &str) -> &Self::Output {
        self.get(key)
            .unwrap_or_else(|| panic!("key {key:?} is not in the dictionary"))
    }
}

impl<V: fmt::Debug, S> fmt::Debug for Dictionary<V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.entries()).finish()
    }
}

impl<V: fmt::Display, S> fmt::Display for Dictionary<V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// Values are shared through `Rc` unless the `arc` feature swaps in `Arc`.
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Dictionary<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Dictionary<i32>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<V: serde::Serialize, S> serde::Serialize for Dictionary<V, S> {
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct DictionaryVisitor<V, S> {
    value_marker: std::marker::PhantomData<V>,
    hasher_marker: std::marker::PhantomData<S>,
}

#[cfg(feature = "serde")]
impl<V, S> DictionaryVisitor<V, S> {
    const fn new() -> Self {
        Self {
            value_marker: std::marker::PhantomData,
            hasher_marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, V, S> serde::de::Visitor<'de> for DictionaryVisitor<V, S>
where
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    type Value = Dictionary<V, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with string keys")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        // The length hint comes from the input, so the table grows one entry at a time.
        let mut dictionary = Dictionary::with_hasher(S::default());
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            dictionary.set(key, value);
        }
        Ok(dictionary)
    }
}

#[cfg(feature = "serde")]
impl<'de, V, S> serde::Deserialize<'de> for Dictionary<V, S>
where
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(DictionaryVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_in_enumeration_order() {
        let dictionary = Dictionary::from_entries([("b", 2), ("a", 1)]);
        let json = serde_json::to_string(&dictionary).unwrap();
        assert_eq!(json, r#"{"b":2,"a":1}"#);
    }

    #[rstest]
    fn test_deserialize() {
        let dictionary: Dictionary<i32> = serde_json::from_str(r#"{"a":1,"b":2}"#).unwrap();
        assert_eq!(dictionary, Dictionary::from_entries([("a", 1), ("b", 2)]));
    }

    struct InflatedLength {
        entries: std::vec::IntoIter<(&'static str, i32)>,
    }

    impl Iterator for InflatedLength {
        type Item = (&'static str, i32);

        fn next(&mut self) -> Option<Self::Item> {
            self.entries.next()
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (usize::MAX / 2, Some(usize::MAX / 2))
        }
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![("a", 1), ("b", 2)])]
    fn test_deserialize_ignores_inflated_length_hint(#[case] entries: Vec<(&'static str, i32)>) {
        use serde::Deserialize;
        use serde::de::value::{Error, MapDeserializer};

        let expected = Dictionary::from_entries(entries.clone());
        let deserializer: MapDeserializer<'_, _, Error> = MapDeserializer::new(InflatedLength {
            entries: entries.into_iter(),
        });

        let dictionary = Dictionary::<i32>::deserialize(deserializer).unwrap();
        assert_eq!(dictionary, expected);
    }
}
