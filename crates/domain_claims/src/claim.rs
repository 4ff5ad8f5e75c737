//! Claim entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use core_kernel::{ClaimId, ShippingFee, TrackingId};
use crate::prize::{stored_prize_names, PrizeSelection};

/// A validated claim, ready to be appended to the store
///
/// The store assigns the id and the claim date; everything else is fixed
/// at validation time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClaim {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub full_address: String,
    pub selected_prizes: PrizeSelection,
    pub total_fee: ShippingFee,
}

/// A persisted claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Store-assigned identifier
    pub id: ClaimId,
    /// Winner's full name
    pub full_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: Option<String>,
    /// Delivery city
    pub city: Option<String>,
    /// Delivery address
    pub full_address: String,
    /// Prize selection exactly as stored
    pub selected_prizes: Value,
    /// Shipping fee
    pub total_fee: ShippingFee,
    /// When the claim was recorded
    pub claim_date: DateTime<Utc>,
}

impl Claim {
    /// Builds the stored form of a new claim once the store has assigned
    /// its identity
    pub fn from_new(id: ClaimId, claim_date: DateTime<Utc>, claim: NewClaim) -> Self {
        Self {
            id,
            full_name: claim.full_name,
            email: claim.email,
            phone: claim.phone,
            city: claim.city,
            full_address: claim.full_address,
            selected_prizes: claim.selected_prizes.to_json(),
            total_fee: claim.total_fee,
            claim_date,
        }
    }

    /// Returns the tracking identifier given to the winner
    pub fn tracking_id(&self) -> TrackingId {
        self.id.tracking_id()
    }

    /// Returns prize names, skipping entries that carry none
    pub fn prize_names(&self) -> Vec<String> {
        stored_prize_names(&self.selected_prizes)
    }
}
