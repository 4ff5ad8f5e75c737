//! Claims domain errors

use thiserror::Error;

/// Errors raised while turning a submission into a claim
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl ClaimError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ClaimError::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the offending field names
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            ClaimError::MissingFields(fields) => fields.clone(),
            ClaimError::InvalidField { field, .. } => vec![field],
        }
    }
}
