//! Composition utilities for monadic pipelines.
//!
//! - [`chain!`]: Sequence a start value through steps with `Monad::flat_map`
//!
//! # Examples
//!
//! ```
//! use monadic::chain;
//! use monadic::control::Maybe;
//!
//! fn half(value: i32) -> Maybe<i32> {
//!     if value == 0 { Maybe::Absent } else { Maybe::Present(value / 2) }
//! }
//!
//! // chain!(x, f, g) = x.flat_map(f).flat_map(g)
//! assert_eq!(chain!(Maybe::Present(20), half, half), Maybe::Present(5));
//! ```

mod chain_macro;
