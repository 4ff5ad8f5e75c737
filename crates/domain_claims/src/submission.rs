//! Claim submission validation
//!
//! A submission is the raw body posted by the web client. Only presence of
//! the mandatory fields is checked for contact details; no format checks
//! are applied to email or phone.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use core_kernel::{MoneyError, ShippingFee};
use crate::claim::NewClaim;
use crate::error::ClaimError;
use crate::prize::PrizeSelection;

/// Raw claim submission as received from the client
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSubmission {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub full_address: Option<String>,
    pub selected_prizes: Option<Value>,
    pub total_fee: Option<Value>,
}

impl ClaimSubmission {
    /// Checks the submission and produces a claim ready for the store
    ///
    /// All missing fields are reported together; shape errors are reported
    /// only once every mandatory field is present.
    pub fn validate(self) -> Result<NewClaim, ClaimError> {
        let full_name = non_blank(self.full_name);
        let email = non_blank(self.email);
        let full_address = non_blank(self.full_address);
        let selected_prizes = self.selected_prizes.filter(|v| !v.is_null());
        let total_fee = self.total_fee.filter(|v| !v.is_null());

        let mut missing = Vec::new();
        if full_name.is_none() {
            missing.push("fullName");
        }
        if email.is_none() {
            missing.push("email");
        }
        if full_address.is_none() {
            missing.push("fullAddress");
        }
        if selected_prizes.is_none() {
            missing.push("selectedPrizes");
        }
        if total_fee.is_none() {
            missing.push("totalFee");
        }

        let (Some(full_name), Some(email), Some(full_address), Some(selected_prizes), Some(total_fee)) =
            (full_name, email, full_address, selected_prizes, total_fee)
        else {
            return Err(ClaimError::MissingFields(missing));
        };

        Ok(NewClaim {
            full_name,
            email,
            phone: non_blank(self.phone),
            city: non_blank(self.city),
            full_address,
            selected_prizes: PrizeSelection::from_json(selected_prizes)?,
            total_fee: parse_fee(&total_fee)?,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Accepts a JSON number or a numeric string
fn parse_fee(value: &Value) -> Result<ShippingFee, ClaimError> {
    let raw = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return Err(ClaimError::invalid("totalFee", "must be a number")),
    };

    let amount = Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .map_err(|_| ClaimError::invalid("totalFee", format!("'{}' is not a number", raw)))?;

    ShippingFee::new(amount).map_err(|e| match e {
        MoneyError::InvalidAmount(_) => ClaimError::invalid("totalFee", "cannot be negative"),
        MoneyError::OutOfRange(_) => ClaimError::invalid(
            "totalFee",
            format!("exceeds the maximum fee of {}", ShippingFee::MAX),
        ),
    })
}
