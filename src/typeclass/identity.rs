//! Identity wrapper type - the identity functor.
//!
//! `Identity` is the second container the type classes are instantiated for.
//! It always holds exactly one value, so every `fmap`, `apply` and `flat_map`
//! runs its function unconditionally. The generic code in this crate works
//! against it without any change to the `Functor`, `Applicative` or `Monad`
//! contracts.

use std::fmt;

use super::TypeConstructor;

/// A container that always holds exactly one value.
///
/// `Identity` never short-circuits: it is the baseline against which the
/// absorbing behavior of [`Maybe`](crate::control::Maybe) can be compared.
///
/// ```rust
/// use monadic::typeclass::{Identity, Monad};
///
/// let doubled = Identity::new(21).flat_map(|n| Identity::new(n * 2));
/// assert_eq!(doubled.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the held value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Borrows the held value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    #[inline]
    fn from(inner: A) -> Self {
        Self(inner)
    }
}

impl<A: fmt::Display> fmt::Display for Identity<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Identity({})", self.0)
    }
}
