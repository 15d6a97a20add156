//! Type class traits for functional programming abstractions.
//!
//! This module provides the type classes (traits) that generic code is
//! written against, together with free functions that dispatch to them:
//!
//! - [`Functor`] / [`fmap`]: Mapping over container values
//! - [`Applicative`] / [`pure`], [`apply`]: Applying functions within containers
//! - [`Monad`] / [`wrap`], [`bind`]: Sequencing computations with dependency
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! so each capability is implemented once per container type and selected
//! statically, with no runtime tag.
//!
//! ## Instances
//!
//! - [`Maybe`](crate::control::Maybe) (with the `control` feature)
//! - [`Identity`]
//!
//! A new container joins by implementing [`TypeConstructor`] and the
//! capability traits; the traits themselves do not change.
//!
//! # Examples
//!
//! Generic code written once against the traits:
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::{Functor, Identity};
//!
//! fn describe<T>(container: T) -> T::WithType<String>
//! where
//!     T: Functor,
//!     T::Inner: std::fmt::Display,
//! {
//!     container.fmap(|value| format!("<{value}>"))
//! }
//!
//! assert_eq!(describe(Maybe::Present(1)), Maybe::Present("<1>".to_string()));
//! assert_eq!(describe(Identity::new(2)), Identity::new("<2>".to_string()));
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;

pub use applicative::{Applicative, apply, pure};
pub use functor::{Functor, fmap};
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::{Monad, bind, wrap};
