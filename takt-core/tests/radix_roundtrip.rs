//! Property tests for the base-N codec.

use proptest::prelude::*;

use takt_core::radix::{format_int, parse_int};

proptest! {
    #[test]
    fn roundtrip_all_bases(value in any::<i32>(), base in 2u32..=16) {
        let text = format_int(value, base).unwrap();
        prop_assert_eq!(parse_int(text.as_bytes(), base), Ok(value));
    }

    #[test]
    fn formatted_digits_are_valid_for_base(value in any::<i32>(), base in 2u32..=16) {
        let text = format_int(value, base).unwrap();
        let digits = text.strip_prefix('-').unwrap_or(&text);
        prop_assert!(!digits.is_empty());
        for ch in digits.chars() {
            let digit = ch.to_digit(16).expect("hex digit");
            prop_assert!(digit < base);
        }
    }
}
