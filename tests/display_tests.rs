//! Integration tests for the textual rendering of containers.

#![cfg(feature = "control")]

use monadic::control::{Maybe, Nothing};
use monadic::typeclass::{Functor, Identity};

#[test]
fn test_maybe_present_display() {
    assert_eq!(format!("{}", Maybe::Present(10)), "Present(10)");
}

#[test]
fn test_maybe_absent_display() {
    let absent: Maybe<i32> = Maybe::Absent;
    assert_eq!(format!("{absent}"), "Absent");
}

#[test]
fn test_present_and_absent_render_distinctly() {
    let present = Maybe::Present(10).to_string();
    let absent = Maybe::<i32>::Absent.to_string();
    assert_ne!(present, absent);
}

#[test]
fn test_nothing_display_matches_absent() {
    assert_eq!(Nothing.to_string(), Maybe::<i32>::Absent.to_string());
}

#[test]
fn test_maybe_nested_display() {
    let nested = Maybe::Present(Maybe::Present("x"));
    assert_eq!(nested.to_string(), "Present(Present(x))");
}

#[test]
fn test_maybe_debug() {
    assert_eq!(format!("{:?}", Maybe::Present(10)), "Present(10)");
    assert_eq!(format!("{:?}", Maybe::<i32>::Absent), "Absent");
}

#[test]
fn test_display_after_fmap() {
    let rendered = Maybe::Present(3).fmap(|n| n * 7).to_string();
    assert_eq!(rendered, "Present(21)");
}

#[test]
fn test_identity_display() {
    assert_eq!(Identity::new("value").to_string(), "Identity(value)");
}
