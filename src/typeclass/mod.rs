//! Type class traits implemented by [`Dictionary`](crate::Dictionary).
//!
//! - [`TypeConstructor`]: higher-kinded type emulation through GATs
//! - [`Foldable`]: folding the values of a structure into a summary
//! - [`Semigroup`]: an associative `combine`
//! - [`Monoid`]: a `Semigroup` with an identity element
//!
//! For dictionaries, `combine` is the left-biased union and the identity is
//! the empty dictionary.
//!
//! # Examples
//!
//! ```rust
//! use dictionary::Dictionary;
//! use dictionary::typeclass::{Foldable, Monoid, Semigroup};
//!
//! let defaults = Dictionary::from_entries([("color", "blue"), ("size", "m")]);
//! let overrides = Dictionary::singleton("color", "red");
//!
//! let settings = Dictionary::combine_all([overrides, defaults]);
//! assert_eq!(settings.get("color"), Some(&"red"));
//! assert_eq!(settings.get("size"), Some(&"m"));
//!
//! let lengths = settings.fold_left(0, |total, value| total + value.len());
//! assert_eq!(lengths, 4);
//! ```

mod foldable;
mod higher;
mod monoid;
mod semigroup;

pub use foldable::Foldable;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
