//! Unit and property tests for input normalization.

use crm_core::normalize::{normalize_email, parse_leading_score};
use proptest::prelude::*;

#[test]
fn score_parses_known_inputs() {
    assert_eq!(parse_leading_score("53"), 53);
    assert_eq!(parse_leading_score("asda3sd"), 0);
    assert_eq!(parse_leading_score("34asda3sd"), 34);
}

proptest! {
    /// The leading-digit parse agrees with collecting the digit prefix and
    /// parsing it whole (saturating above `u32::MAX`).
    #[test]
    fn score_parse_matches_reference_model(input in ".*") {
        let digits: String = input
            .trim()
            .chars()
            .take_while(|ch| ch.is_ascii_digit())
            .collect();
        let expected = if digits.is_empty() {
            0
        } else {
            digits.parse::<u32>().unwrap_or(u32::MAX)
        };
        prop_assert_eq!(parse_leading_score(&input), expected);
    }

    #[test]
    fn normalized_email_has_no_surrounding_whitespace(input in ".*") {
        let normalized = normalize_email(&input);
        prop_assert_eq!(normalized.trim(), normalized.as_str());
    }

    #[test]
    fn email_normalization_is_idempotent(input in ".*") {
        let once = normalize_email(&input);
        let twice = normalize_email(&once);
        prop_assert_eq!(once, twice);
    }
}
