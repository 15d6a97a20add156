//! Maybe type - a value that is either present or absent.
//!
//! This module provides the `Maybe<A>` type, the optional container that the
//! `Functor`, `Applicative` and `Monad` type classes are instantiated for.
//! A `Maybe<A>` is either `Present(A)` or `Absent`; absence is ordinary data
//! that propagates through every combinator without invoking the supplied
//! functions.
//!
//! Steps that return a `Maybe` can be chained with the `|` operator, which is
//! `Monad::flat_map` written infix. `|` is left-associative, so a chain reads
//! top to bottom:
//!
//! ```rust
//! use monadic::control::Maybe;
//!
//! fn half(value: i32) -> Maybe<i32> {
//!     if value == 0 { Maybe::Absent } else { Maybe::Present(value / 2) }
//! }
//!
//! let once = Maybe::Present(20) | half;
//! assert_eq!(once, Maybe::Present(10));
//!
//! // 10 -> 5 -> 2 -> 1 -> 0 -> Absent
//! let exhausted = once | half | half | half | half | half;
//! assert!(exhausted.is_absent());
//! ```

use std::fmt;
use std::ops::BitOr;

use super::error::AbsentValueError;
use crate::typeclass::Monad;

/// A value that is either present or absent.
///
/// Exactly one of the two states holds at any time. A `Maybe` is never
/// modified in place: `fmap`, `apply` and `flat_map` always build a new one.
///
/// # Examples
///
/// ```rust
/// use monadic::control::{Maybe, Nothing};
/// use monadic::typeclass::Functor;
///
/// let present = Maybe::present(5);
/// assert_eq!(present.fmap(|n| n * 2), Maybe::Present(10));
///
/// let absent: Maybe<i32> = Nothing.into();
/// assert_eq!(absent.fmap(|n| n * 2), Maybe::Absent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// The empty state.
    Absent,
    /// The state holding a value.
    Present(A),
}

/// The empty marker, convertible into an `Absent` of any element type.
///
/// # Examples
///
/// ```rust
/// use monadic::control::{Maybe, Nothing};
///
/// let names: Maybe<String> = Nothing.into();
/// let ages: Maybe<u32> = Nothing.into();
/// assert!(names.is_absent() && ages.is_absent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Nothing;

impl<A> Maybe<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Maybe` holding `value`.
    #[inline]
    pub const fn present(value: A) -> Self {
        Self::Present(value)
    }

    /// Creates an empty `Maybe`.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    // =========================================================================
    // State Queries
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert!(Maybe::Present(1).is_present());
    /// assert!(!Maybe::<i32>::Absent.is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns a reference to the present value.
    ///
    /// Callers must check [`is_present`](Self::is_present) first; use
    /// [`try_value`](Self::try_value) for a checked variant.
    ///
    /// # Panics
    ///
    /// Panics if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let value = Maybe::Present(10);
    /// if value.is_present() {
    ///     assert_eq!(*value.value(), 10);
    /// }
    /// ```
    #[inline]
    #[track_caller]
    pub const fn value(&self) -> &A {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("called `Maybe::value()` on an `Absent` value"),
        }
    }

    /// Returns the present value, consuming the `Maybe`.
    ///
    /// # Panics
    ///
    /// Panics if this is `Absent`.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> A {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("called `Maybe::into_value()` on an `Absent` value"),
        }
    }

    /// Returns a reference to the present value, or an error if absent.
    ///
    /// # Errors
    ///
    /// Returns [`AbsentValueError`] if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{AbsentValueError, Maybe};
    ///
    /// assert_eq!(Maybe::Present(3).try_value(), Ok(&3));
    /// assert_eq!(Maybe::<i32>::Absent.try_value(), Err(AbsentValueError));
    /// ```
    #[inline]
    pub const fn try_value(&self) -> Result<&A, AbsentValueError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(AbsentValueError),
        }
    }

    /// Returns the present value or `default`.
    #[inline]
    pub fn value_or(self, default: A) -> A {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the present value or computes one from `function`.
    ///
    /// `function` is only called when this is `Absent`.
    #[inline]
    pub fn value_or_else<F>(self, function: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => function(),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Borrows the contents, producing a `Maybe<&A>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<A> Default for Maybe<A> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<A> Maybe<Maybe<A>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert_eq!(Maybe::Present(Maybe::Present(1)).flatten(), Maybe::Present(1));
    /// assert_eq!(Maybe::Present(Maybe::<i32>::Absent).flatten(), Maybe::Absent);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<A> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Chain Operator
// =============================================================================

impl<A, B, F> BitOr<F> for Maybe<A>
where
    F: FnOnce(A) -> Maybe<B>,
{
    type Output = Maybe<B>;

    /// `maybe | step` is `maybe.flat_map(step)`.
    #[inline]
    fn bitor(self, step: F) -> Maybe<B> {
        self.flat_map(step)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => write!(formatter, "Absent"),
        }
    }
}

impl fmt::Display for Nothing {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Absent")
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A> From<Nothing> for Maybe<A> {
    #[inline]
    fn from(_: Nothing) -> Self {
        Self::Absent
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(option: Option<A>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        maybe.into_option()
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Copy, Send, Sync);
static_assertions::assert_impl_all!(Nothing: Copy, Send, Sync);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn half(value: i32) -> Maybe<i32> {
        if value == 0 {
            Maybe::Absent
        } else {
            Maybe::Present(value / 2)
        }
    }

    #[rstest]
    fn present_construction() {
        let value = Maybe::present(42);
        assert!(value.is_present());
        assert!(!value.is_absent());
    }

    #[rstest]
    fn absent_construction() {
        let value: Maybe<i32> = Maybe::absent();
        assert!(value.is_absent());
        assert!(!value.is_present());
    }

    #[rstest]
    fn nothing_converts_into_absent() {
        let value: Maybe<String> = Nothing.into();
        assert_eq!(value, Maybe::Absent);
    }

    #[rstest]
    fn default_is_absent() {
        assert_eq!(Maybe::<i32>::default(), Maybe::Absent);
    }

    #[rstest]
    fn value_returns_reference() {
        let value = Maybe::Present("hello".to_string());
        assert_eq!(value.value(), "hello");
    }

    #[rstest]
    #[should_panic(expected = "called `Maybe::value()` on an `Absent` value")]
    fn value_on_absent_panics() {
        let value: Maybe<i32> = Maybe::Absent;
        let _ = value.value();
    }

    #[rstest]
    #[should_panic(expected = "called `Maybe::into_value()` on an `Absent` value")]
    fn into_value_on_absent_panics() {
        let value: Maybe<i32> = Maybe::Absent;
        let _ = value.into_value();
    }

    #[rstest]
    fn try_value_reports_absence() {
        let value: Maybe<i32> = Maybe::Absent;
        assert_eq!(value.try_value(), Err(AbsentValueError));
    }

    #[rstest]
    #[case(Maybe::Present(3), 3)]
    #[case(Maybe::Absent, 7)]
    fn value_or_falls_back(#[case] value: Maybe<i32>, #[case] expected: i32) {
        assert_eq!(value.value_or(7), expected);
    }

    #[rstest]
    fn value_or_else_not_called_when_present() {
        let calls = Cell::new(0);
        let result = Maybe::Present(1).value_or_else(|| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(result, 1);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn option_conversion_roundtrip() {
        let maybe: Maybe<i32> = Some(5).into();
        assert_eq!(maybe, Maybe::Present(5));
        let option: Option<i32> = maybe.into();
        assert_eq!(option, Some(5));

        let maybe: Maybe<i32> = None.into();
        assert_eq!(maybe.into_option(), None);
    }

    #[rstest]
    fn as_ref_keeps_original() {
        let value = Maybe::Present(String::from("abc"));
        assert_eq!(value.as_ref(), Maybe::Present(&String::from("abc")));
        assert!(value.is_present());
    }

    #[rstest]
    fn chain_single_step() {
        assert_eq!(Maybe::Present(20) | half, Maybe::Present(10));
    }

    #[rstest]
    fn chain_reaches_absent() {
        let result = Maybe::Present(10) | half | half | half | half | half;
        assert_eq!(result, Maybe::Absent);
    }

    #[rstest]
    fn chain_changes_element_type() {
        let result = Maybe::Present(12) | half | (|n: i32| Maybe::Present(n.to_string()));
        assert_eq!(result, Maybe::Present("6".to_string()));
    }

    #[rstest]
    #[case(Maybe::Present(10), "Present(10)")]
    #[case(Maybe::Absent, "Absent")]
    fn display_renders_state(#[case] value: Maybe<i32>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }
}
