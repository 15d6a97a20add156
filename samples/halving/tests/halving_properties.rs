//! Property tests for the halving chain.

use halving::{half, halve_repeatedly};
use monadic::control::Maybe;
use proptest::prelude::*;

proptest! {
    #[test]
    fn half_is_absent_only_for_zero(value in any::<i32>()) {
        prop_assert_eq!(half(value).is_absent(), value == 0);
    }

    #[test]
    fn absent_stays_absent(steps in 0usize..64) {
        prop_assert_eq!(halve_repeatedly(Maybe::Absent, steps), Maybe::Absent);
    }

    #[test]
    fn positive_start_becomes_absent_within_bit_length(start in 1i32..=i32::MAX) {
        let bits = (i32::BITS - start.leading_zeros()) as usize;
        prop_assert_eq!(halve_repeatedly(Maybe::Present(start), bits), Maybe::Present(0));
        prop_assert_eq!(halve_repeatedly(Maybe::Present(start), bits + 1), Maybe::Absent);
    }
}
