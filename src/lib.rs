//! # monadic
//!
//! Functor, Applicative and Monad type classes for Rust, instantiated for
//! an optional value container.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Functor`](typeclass::Functor),
//!   [`Applicative`](typeclass::Applicative) and [`Monad`](typeclass::Monad),
//!   dispatched statically through a GAT-based type-constructor emulation
//! - **Optional Container**: [`Maybe`](control::Maybe), a value that is either
//!   `Present` or `Absent`, with a `|` chain operator over `bind`
//! - **Composition**: the [`chain!`] macro for sequencing any monad
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Applicative, Monad)
//! - `control`: The `Maybe` container and its chain operator
//! - `compose`: The `chain!` macro
//! - `serde`: Serialization support for `Maybe`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! fn half(value: i32) -> Maybe<i32> {
//!     if value == 0 { Maybe::Absent } else { Maybe::Present(value / 2) }
//! }
//!
//! assert_eq!(Maybe::Present(20) | half, Maybe::Present(10));
//! assert_eq!(Maybe::Present(10) | half | half | half | half | half, Maybe::Absent);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monadic::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "compose")]
    pub use crate::chain;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;
