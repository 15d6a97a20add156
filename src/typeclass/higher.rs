//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust does not natively support Higher-Kinded Types: there is no way to
//! write a trait that abstracts over `Maybe<_>` as a type constructor.
//! [`TypeConstructor`] works around this with a Generic Associated Type, so
//! that `Functor`, `Applicative` and `Monad` can talk about "the same
//! container holding a different element type".
//!
//! # Example
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::TypeConstructor;
//!
//! fn retarget<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let absent: Maybe<String> = retarget(Maybe::Present(42));
//! assert_eq!(absent, Maybe::Absent);
//! ```

/// A trait representing a type constructor.
///
/// The implementing type is a type constructor applied to some type `A`,
/// for example `Maybe<A>` or `Identity<A>`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Maybe<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The `TypeConstructor<Inner = B>` bound keeps the result a valid type
    /// constructor, so transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Container Implementations
// =============================================================================

#[cfg(feature = "control")]
impl<A> TypeConstructor for crate::control::Maybe<A> {
    type Inner = A;
    type WithType<B> = crate::control::Maybe<B>;
}
