//! Serialization tests for `Maybe` under the `serde` feature.

#![cfg(all(feature = "control", feature = "serde"))]

use monadic::control::Maybe;
use rstest::rstest;

#[rstest]
fn present_serializes_as_tagged_value() {
    let json = serde_json::to_string(&Maybe::Present(10)).unwrap();
    assert_eq!(json, r#"{"Present":10}"#);
}

#[rstest]
fn absent_serializes_as_unit_variant() {
    let json = serde_json::to_string(&Maybe::<i32>::Absent).unwrap();
    assert_eq!(json, r#""Absent""#);
}

#[rstest]
#[case(r#"{"Present":"text"}"#, Maybe::Present("text".to_string()))]
#[case(r#""Absent""#, Maybe::Absent)]
fn deserializes_both_states(#[case] json: &str, #[case] expected: Maybe<String>) {
    let value: Maybe<String> = serde_json::from_str(json).unwrap();
    assert_eq!(value, expected);
}
