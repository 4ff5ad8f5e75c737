//! Claims DTOs
//!
//! Response bodies use camelCase keys to match the web client. Fees are
//! rendered as JSON numbers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use core_kernel::{ClaimId, ShippingFee};
use domain_claims::Claim;

/// Message returned with an empty JSON listing
pub const NO_CLAIMS_MESSAGE: &str = "No claims found";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitClaimResponse {
    pub success: bool,
    pub tracking_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_fee: Decimal,
    pub currency: &'static str,
    pub message: String,
}

impl SubmitClaimResponse {
    pub fn accepted(id: ClaimId, fee: ShippingFee) -> Self {
        Self {
            success: true,
            tracking_id: id.tracking_id().to_string(),
            total_fee: fee.amount(),
            currency: ShippingFee::currency().code(),
            message: "Claim submitted successfully".to_string(),
        }
    }
}

/// A stored claim as shown to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimView {
    pub id: i64,
    pub tracking_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub full_address: String,
    pub selected_prizes: Value,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_fee: Decimal,
    pub currency: &'static str,
    pub claim_date: DateTime<Utc>,
}

impl From<Claim> for ClaimView {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id.value(),
            tracking_id: claim.tracking_id().to_string(),
            full_name: claim.full_name,
            email: claim.email,
            phone: claim.phone,
            city: claim.city,
            full_address: claim.full_address,
            selected_prizes: claim.selected_prizes,
            total_fee: claim.total_fee.amount(),
            currency: ShippingFee::currency().code(),
            claim_date: claim.claim_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClaimListResponse {
    pub success: bool,
    pub count: usize,
    pub claims: Vec<ClaimView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Vec<Claim>> for ClaimListResponse {
    fn from(claims: Vec<Claim>) -> Self {
        let message = claims.is_empty().then(|| NO_CLAIMS_MESSAGE.to_string());
        Self {
            success: true,
            count: claims.len(),
            claims: claims.into_iter().map(ClaimView::from).collect(),
            message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClaimDetailResponse {
    pub success: bool,
    pub claim: ClaimView,
}

/// Listing output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListClaimsQuery {
    #[serde(default)]
    pub format: ListFormat,
}
