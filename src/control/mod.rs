//! Control structures for functional programming.
//!
//! This module provides the optional container the type classes are
//! instantiated for:
//!
//! - [`Maybe`]: A value that is either `Present` or `Absent`
//! - [`Nothing`]: The empty marker, convertible into any `Maybe<A>`
//! - [`AbsentValueError`]: Returned when reading the value of an `Absent`
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::{Applicative, Functor};
//!
//! let increment: Maybe<fn(i32) -> i32> = Maybe::Present(|n| n + 1);
//! assert_eq!(increment.apply(Maybe::Present(1)), Maybe::Present(2));
//!
//! let label = Maybe::Present(7).fmap(|n| format!("#{n}"));
//! assert_eq!(label.to_string(), "Present(#7)");
//! ```

mod error;
mod maybe;

pub use error::AbsentValueError;
pub use maybe::{Maybe, Nothing};
