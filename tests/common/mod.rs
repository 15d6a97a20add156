//! Shared helpers for the integration tests.

#![allow(dead_code)]

use monadic::control::Maybe;
use proptest::prelude::*;

/// Halves a number, yielding `Absent` when the input is zero.
pub fn half(value: i32) -> Maybe<i32> {
    if value == 0 {
        Maybe::Absent
    } else {
        Maybe::Present(value / 2)
    }
}

/// Generates `Present` and `Absent` values with roughly equal weight.
pub fn maybe_of<S>(element: S) -> impl Strategy<Value = Maybe<S::Value>>
where
    S: Strategy,
    S::Value: Clone,
{
    prop::option::of(element).prop_map(Maybe::from)
}
