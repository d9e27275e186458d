//! Higher-kinded type emulation through generic associated types.

/// A type constructor applied to some inner type.
///
/// `WithType<B>` names the same constructor applied to `B`, which lets
/// traits such as [`Foldable`](super::Foldable) talk about the element type
/// of a container.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
///
/// # Examples
///
/// ```rust
/// use dictionary::Dictionary;
/// use dictionary::typeclass::TypeConstructor;
///
/// fn relabel<T: TypeConstructor>(_: &T) -> T::WithType<String>
/// where
///     T::WithType<String>: Default,
/// {
///     Default::default()
/// }
///
/// let counts = Dictionary::singleton("a", 1);
/// let labels: Dictionary<String> = relabel(&counts);
/// assert!(labels.is_empty());
/// ```
pub trait TypeConstructor {
    /// The type this constructor is applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
