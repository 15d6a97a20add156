//! Applicative type class - applying functions within contexts.
//!
//! This module provides the `Applicative` trait, which extends `Functor` with
//! the ability to:
//!
//! - Lift pure values into the applicative context (`pure`)
//! - Apply a function held in the context to a value held in the context (`apply`)
//! - Combine two independent values using a function (`map2`)
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::{Applicative, apply, pure};
//!
//! let x: Maybe<i32> = pure::<Maybe<()>, _>(42);
//! assert_eq!(x, Maybe::Present(42));
//!
//! let increment: Maybe<fn(i32) -> i32> = Maybe::Present(|n| n + 1);
//! assert_eq!(apply(increment, Maybe::Present(1)), Maybe::Present(2));
//! assert_eq!(apply(increment, Maybe::Absent), Maybe::Absent);
//!
//! let sum = Maybe::Present(1).map2(Maybe::Present(2), |a, b| a + b);
//! assert_eq!(sum, Maybe::Present(3));
//! ```

use super::functor::Functor;
use super::identity::Identity;

#[cfg(feature = "control")]
use crate::control::Maybe;

/// A type class for types that support lifting values and applying wrapped functions.
///
/// # Laws
///
/// ```text
/// pure(|x| x).apply(v) == v
/// pure(f).apply(pure(x)) == pure(f(x))
/// u.apply(pure(y)) == pure(|f| f(y)).apply(u)
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Applicative;
    ///
    /// let x: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(x, Maybe::Present(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies a function inside the context to a value inside the context.
    ///
    /// Available when `Self` holds a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::Present(|x| x + 1);
    /// assert_eq!(function.apply(Maybe::Present(5)), Maybe::Present(6));
    ///
    /// let missing: Maybe<fn(i32) -> i32> = Maybe::Absent;
    /// assert_eq!(missing.apply(Maybe::Present(5)), Maybe::Absent);
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Applicative;
    ///
    /// let sum = Maybe::Present(1).map2(Maybe::<i32>::Absent, |x, y| x + y);
    /// assert_eq!(sum, Maybe::Absent);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates two applicatives and keeps the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates two applicatives and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }
}

/// Lifts `value` into the applicative `T`.
///
/// `T` only selects the type constructor; its element type is ignored, so
/// `pure::<Maybe<()>, _>(1)` yields a `Maybe<i32>`.
#[inline]
pub fn pure<T, B>(value: B) -> T::WithType<B>
where
    T: Applicative,
{
    T::pure(value)
}

/// Applies `wrapped_function` to `wrapped_argument`, dispatching to their
/// [`Applicative`] implementation.
#[inline]
pub fn apply<T, B, Output>(
    wrapped_function: T,
    wrapped_argument: T::WithType<B>,
) -> T::WithType<Output>
where
    T: Applicative,
    T::Inner: FnOnce(B) -> Output,
{
    wrapped_function.apply(wrapped_argument)
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    /// An absent function short-circuits before the argument is looked at;
    /// a present one is mapped over the argument.
    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match self {
            Self::Present(function) => other.fmap(function),
            Self::Absent => Maybe::Absent,
        }
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Maybe::Present(b)) => Maybe::Present(function(a, b)),
            _ => Maybe::Absent,
        }
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity::new(value)
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity::new((self.into_inner())(other.into_inner()))
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity::new(function(self.into_inner(), other.into_inner()))
    }
}
