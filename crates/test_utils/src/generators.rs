//! Property-Based Test Generators
//!
//! Proptest strategies that only produce data a submission would accept.

use core_kernel::ShippingFee;
use domain_claims::{NewClaim, Prize, PrizeSelection};
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{json, Value};

/// Strategy for fees in kobo, up to ten million naira
pub fn fee_strategy() -> impl Strategy<Value = ShippingFee> {
    (0i64..1_000_000_000i64).prop_map(|kobo| {
        ShippingFee::new(Decimal::new(kobo, 2)).unwrap_or_default()
    })
}

/// Strategy for non-blank names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,12} [A-Z][a-z]{1,12}"
}

/// Strategy for prize selections with optional extra attributes
pub fn prize_selection_strategy() -> impl Strategy<Value = PrizeSelection> {
    prop::collection::vec(("[A-Za-z][A-Za-z ]{0,15}", prop::option::of(0u32..100_000)), 0..6)
        .prop_map(|items| {
            PrizeSelection::new(
                items
                    .into_iter()
                    .map(|(name, value)| match value {
                        Some(v) => Prize::named(name).with_attribute("value", v),
                        None => Prize::named(name),
                    })
                    .collect(),
            )
        })
}

/// Strategy for complete validated claims
pub fn new_claim_strategy() -> impl Strategy<Value = NewClaim> {
    (
        name_strategy(),
        "[a-z]{1,10}@[a-z]{1,8}\\.com",
        prop::option::of("\\+234[0-9]{10}"),
        prop::option::of("[A-Z][a-z]{2,10}"),
        "[0-9]{1,3} [A-Z][a-z]{2,10} (Street|Road|Close)",
        prize_selection_strategy(),
        fee_strategy(),
    )
        .prop_map(
            |(full_name, email, phone, city, full_address, selected_prizes, total_fee)| NewClaim {
                full_name,
                email,
                phone,
                city,
                full_address,
                selected_prizes,
                total_fee,
            },
        )
}

/// Strategy for JSON submission bodies that pass validation
pub fn submission_body_strategy() -> impl Strategy<Value = Value> {
    new_claim_strategy().prop_map(|claim| {
        json!({
            "fullName": claim.full_name,
            "email": claim.email,
            "phone": claim.phone,
            "city": claim.city,
            "fullAddress": claim.full_address,
            "selectedPrizes": claim.selected_prizes.to_json(),
            "totalFee": claim.total_fee.amount().to_string(),
        })
    })
}
