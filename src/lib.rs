//! # dictionary
//!
//! A string-keyed associative container with two clearly separated
//! operation families.
//!
//! ## Overview
//!
//! - **Destructive operations** (`set`, `update`, `remove`) take `&mut self`
//!   and hand back the same store so calls can be chained.
//! - **Transformational operations** (`map`, `filter`, `partition`, `union`,
//!   `intersect`, `diff`) borrow their inputs and build a new store whose
//!   values are shared with the input, never deep-copied.
//! - **Generalized merge** folds over two stores with three accumulators
//!   (left only, both, right only).
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Foldable`, `Semigroup`, `Monoid` and friends (default)
//! - `arc`: share values through `Arc` so stores are `Send + Sync`
//! - `serde`: serialization support
//! - `fxhash` / `ahash`: faster default hash builders
//! - `full`: `typeclass` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use dictionary::prelude::*;
//!
//! let mut scores: Dictionary<i32> = Dictionary::from_entries([
//!     ("alice".to_string(), 3),
//!     ("bob".to_string(), 5),
//! ]);
//!
//! scores
//!     .set("carol", 7)
//!     .update("bob", |score| score.map(|score| score + 1))
//!     .remove("alice");
//!
//! assert_eq!(scores.get("bob"), Some(&6));
//! assert!(!scores.has("alice"));
//!
//! let high = scores.filter(|_, score| *score > 6);
//! assert_eq!(high.len(), 1);
//! assert_eq!(scores.len(), 2); // input untouched
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use dictionary::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dictionary::*;
    pub use crate::error::DictionaryError;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod dictionary;
pub mod error;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use dictionary::Dictionary;
pub use error::DictionaryError;
