//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which sequences computations where
//! each step decides, from the previous result, whether and how the
//! computation continues. The free functions [`wrap`] and [`bind`] dispatch
//! to it.
//!
//! `Monad` is its own capability here: it is not declared as an extension of
//! `Applicative`. For any lawful instance the two still have to agree:
//!
//! ```text
//! Self::wrap(a) == Self::pure(a)
//! m.flat_map(|b| Self::wrap(f(b))) == m.fmap(f)
//! ```
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::wrap(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::wrap) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::{Monad, bind};
//!
//! fn parse_positive(input: &str) -> Maybe<i32> {
//!     input.parse::<i32>().ok().filter(|&n| n > 0).into()
//! }
//!
//! let result = Maybe::Present("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::Present(n * 2));
//! assert_eq!(result, Maybe::Present(84));
//!
//! assert_eq!(bind(Maybe::Present("-1"), parse_positive), Maybe::Absent);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

#[cfg(feature = "control")]
use crate::control::Maybe;

/// A type class for types that support sequencing of computations.
///
/// Once a step produces the "empty" state of the container, every later
/// step is skipped.
///
/// # Laws
///
/// ```text
/// Self::wrap(a).flat_map(f) == f(a)
/// m.flat_map(Self::wrap) == m
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
pub trait Monad: TypeConstructor {
    /// Lifts a value into the monad.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Monad;
    ///
    /// let x: Maybe<&str> = <Maybe<()>>::wrap("hello");
    /// assert_eq!(x, Maybe::Present("hello"));
    /// ```
    fn wrap<B>(value: B) -> Self::WithType<B>;

    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// In Haskell, this is `>>=` (bind). The function already returns the
    /// container, so its result is passed through without further wrapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Monad;
    ///
    /// let y = Maybe::Present(5).flat_map(|n| Maybe::Present(n * 2));
    /// assert_eq!(y, Maybe::Present(10));
    ///
    /// let w = Maybe::Present(5).flat_map(|n| if n > 10 { Maybe::Present(n) } else { Maybe::Absent });
    /// assert_eq!(w, Maybe::Absent);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` matching `Option::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is empty the emptiness propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::Present(5).then(Maybe::Present("hello")), Maybe::Present("hello"));
    /// assert_eq!(Maybe::<i32>::Absent.then(Maybe::Present("hello")), Maybe::Absent);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

/// Lifts `value` into the monad `T`.
///
/// `T` only selects the type constructor, as with [`pure`](super::pure).
#[inline]
pub fn wrap<T, B>(value: B) -> T::WithType<B>
where
    T: Monad,
{
    T::wrap(value)
}

/// Binds `step` to `container`, dispatching to its [`Monad`] implementation.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::typeclass::bind;
///
/// fn half(value: i32) -> Maybe<i32> {
///     if value == 0 { Maybe::Absent } else { Maybe::Present(value / 2) }
/// }
///
/// assert_eq!(bind(Maybe::Present(20), half), Maybe::Present(10));
/// assert_eq!(bind(bind(Maybe::Present(1), half), half), Maybe::Absent);
/// ```
#[inline]
pub fn bind<T, B, F>(container: T, step: F) -> T::WithType<B>
where
    T: Monad,
    F: FnOnce(T::Inner) -> T::WithType<B>,
{
    container.flat_map(step)
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Monad for Maybe<A> {
    #[inline]
    fn wrap<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn wrap<B>(value: B) -> Identity<B> {
        Identity::new(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Maybe<A> Tests
    // =========================================================================

    #[cfg(feature = "control")]
    mod maybe {
        use super::*;
        use crate::typeclass::{Applicative, Functor};
        use std::cell::Cell;

        fn half(value: i32) -> Maybe<i32> {
            if value == 0 {
                Maybe::Absent
            } else {
                Maybe::Present(value / 2)
            }
        }

        #[rstest]
        fn flat_map_present_to_present() {
            assert_eq!(Maybe::Present(5).flat_map(|n| Maybe::Present(n * 2)), Maybe::Present(10));
        }

        #[rstest]
        fn flat_map_present_to_absent() {
            assert_eq!(Maybe::Present(0).flat_map(half), Maybe::Absent);
        }

        #[rstest]
        fn flat_map_absent_skips_step() {
            let calls = Cell::new(0);
            let result = Maybe::<i32>::Absent.flat_map(|n| {
                calls.set(calls.get() + 1);
                Maybe::Present(n)
            });
            assert_eq!(result, Maybe::Absent);
            assert_eq!(calls.get(), 0);
        }

        #[rstest]
        fn and_then_alias() {
            assert_eq!(Maybe::Present(20).and_then(half), Maybe::Present(10));
        }

        #[rstest]
        fn wrap_agrees_with_pure() {
            let wrapped: Maybe<i32> = wrap::<Maybe<()>, _>(3);
            let pured: Maybe<i32> = <Maybe<()>>::pure(3);
            assert_eq!(wrapped, pured);
        }

        #[rstest]
        fn bind_free_function() {
            assert_eq!(bind(Maybe::Present(20), half), Maybe::Present(10));
            assert_eq!(bind(Maybe::Absent, half), Maybe::Absent);
        }

        #[rstest]
        #[case(Maybe::Present(9))]
        #[case(Maybe::Absent)]
        fn bind_with_wrap_equals_fmap(#[case] value: Maybe<i32>) {
            let function = |n: i32| n * 3;
            let via_bind = value.flat_map(|b| <Maybe<()>>::wrap(function(b)));
            assert_eq!(via_bind, value.fmap(function));
        }

        #[rstest]
        #[case(0)]
        #[case(7)]
        fn left_identity_law(#[case] value: i32) {
            assert_eq!(<Maybe<()>>::wrap(value).flat_map(half), half(value));
        }

        #[rstest]
        #[case(Maybe::Present(7))]
        #[case(Maybe::Absent)]
        fn right_identity_law(#[case] monad: Maybe<i32>) {
            assert_eq!(monad.flat_map(<Maybe<()>>::wrap), monad);
        }

        #[rstest]
        #[case(Maybe::Present(8))]
        #[case(Maybe::Present(1))]
        #[case(Maybe::Absent)]
        fn associativity_law(#[case] monad: Maybe<i32>) {
            let add_one = |n: i32| Maybe::Present(n + 1);
            let left = monad.flat_map(half).flat_map(add_one);
            let right = monad.flat_map(|x| half(x).flat_map(add_one));
            assert_eq!(left, right);
        }
    }

    // =========================================================================
    // Identity<A> Tests
    // =========================================================================

    #[rstest]
    fn identity_flat_map_transforms() {
        let result = Identity::new(5).flat_map(|n| Identity::new(n * 2));
        assert_eq!(result, Identity::new(10));
    }

    #[rstest]
    fn identity_then_replaces() {
        assert_eq!(Identity::new(5).then(Identity::new("next")), Identity::new("next"));
    }

    #[rstest]
    fn identity_left_identity_law() {
        let function = |n: i32| Identity::new(n - 1);
        assert_eq!(<Identity<()>>::wrap(4).flat_map(function), function(4));
    }

    #[rstest]
    fn identity_bind_free_function() {
        assert_eq!(bind(Identity::new(2), |n| Identity::new(n * n)), Identity::new(4));
    }
}
