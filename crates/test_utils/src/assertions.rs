//! Custom Test Assertions
//!
//! Assertion helpers for claims that print the offending values on failure.

use domain_claims::{Claim, NewClaim};
use rust_decimal::Decimal;

/// Asserts that claims are ordered newest first, ties broken by id
pub fn assert_newest_first(claims: &[Claim]) {
    for pair in claims.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let ordered = a.claim_date > b.claim_date
            || (a.claim_date == b.claim_date && a.id.value() > b.id.value());
        assert!(
            ordered,
            "Claims out of order: {} ({}) listed before {} ({})",
            a.tracking_id(),
            a.claim_date,
            b.tracking_id(),
            b.claim_date
        );
    }
}

/// Asserts that a stored claim carries exactly the submitted values
pub fn assert_claim_matches(stored: &Claim, submitted: &NewClaim) {
    assert_eq!(stored.full_name, submitted.full_name, "full_name mismatch");
    assert_eq!(stored.email, submitted.email, "email mismatch");
    assert_eq!(stored.phone, submitted.phone, "phone mismatch");
    assert_eq!(stored.city, submitted.city, "city mismatch");
    assert_eq!(stored.full_address, submitted.full_address, "full_address mismatch");
    assert_eq!(
        stored.selected_prizes,
        submitted.selected_prizes.to_json(),
        "selected_prizes mismatch"
    );
    assert_fee_eq(stored.total_fee.amount(), submitted.total_fee.amount());
}

/// Asserts that two fees are equal once scale differences are ignored
pub fn assert_fee_eq(actual: Decimal, expected: Decimal) {
    assert_eq!(
        actual.normalize(),
        expected.normalize(),
        "Fee mismatch: actual={}, expected={}",
        actual,
        expected
    );
}
