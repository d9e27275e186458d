//! Error type for the fallible entry points of [`Dictionary`](crate::Dictionary).
//!
//! The core operations are total and never fail. Only the `try_*` variants,
//! which accept fallible sources or callbacks, report errors, and they hand
//! the caller's original error back unchanged as `source`.

use thiserror::Error;

/// Failure raised by a `try_*` operation.
///
/// `E` is the caller's own error type.
///
/// # Examples
///
/// ```rust
/// use dictionary::{Dictionary, DictionaryError};
///
/// let mut dictionary = Dictionary::singleton("limit", 10);
/// let result = dictionary.try_update("limit", |_| Err::<Option<i32>, _>("read-only"));
///
/// match result {
///     Err(DictionaryError::Callback { key, source }) => {
///         assert_eq!(key, "limit");
///         assert_eq!(source, "read-only");
///     }
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DictionaryError<E> {
    /// The entry source failed before it was exhausted.
    #[error("entry source failed after {consumed} entries")]
    Iteration {
        /// Entries successfully read before the failure.
        consumed: usize,
        /// The source's own error.
        source: E,
    },

    /// A caller-supplied callback failed.
    #[error("callback failed for key {key:?}")]
    Callback {
        /// Key of the entry being processed.
        key: String,
        /// The callback's own error.
        source: E,
    },
}

impl<E> DictionaryError<E> {
    /// Returns the caller's original error.
    pub fn into_source(self) -> E {
        match self {
            Self::Iteration { source, .. } | Self::Callback { source, .. } => source,
        }
    }

    /// Returns the caller's original error by reference.
    pub const fn source_ref(&self) -> &E {
        match self {
            Self::Iteration { source, .. } | Self::Callback { source, .. } => source,
        }
    }
}
