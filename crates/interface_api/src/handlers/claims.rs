//! Claims handlers

use std::str::FromStr;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info, instrument, warn};

use core_kernel::TrackingId;
use domain_claims::{render_plain_text, ClaimSubmission};

use crate::dto::claims::*;
use crate::{error::ApiError, AppState};

/// Validates and records a claim
#[instrument(skip(state, payload))]
pub async fn submit_claim(
    State(state): State<AppState>,
    payload: Result<Json<ClaimSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitClaimResponse>), ApiError> {
    let Json(submission) = payload?;

    let claim = submission.validate().map_err(|err| {
        warn!(error = %err, "Rejected claim submission");
        err
    })?;

    let fee = claim.total_fee;
    let prize_count = claim.selected_prizes.len();

    let id = state.store.insert(claim).await.map_err(|err| {
        error!(error = %err, "Failed to save claim");
        ApiError::storage("Failed to save claim", err)
    })?;

    let response = SubmitClaimResponse::accepted(id, fee);
    info!(
        tracking_id = %response.tracking_id,
        prize_count,
        total_fee = %fee,
        "Claim recorded"
    );

    Ok((StatusCode::CREATED, Json(response)))
}

/// Lists every claim, newest first
#[instrument(skip(state, query))]
pub async fn list_claims(
    State(state): State<AppState>,
    query: Result<Query<ListClaimsQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;

    let claims = state.store.list().await.map_err(|err| {
        error!(error = %err, "Failed to list claims");
        ApiError::storage("Failed to fetch claims", err)
    })?;

    info!(count = claims.len(), format = ?query.format, "Listed claims");

    Ok(match query.format {
        ListFormat::Text => render_plain_text(&claims).into_response(),
        ListFormat::Json => Json(ClaimListResponse::from(claims)).into_response(),
    })
}

/// Looks up one claim by its tracking id
#[instrument(skip(state))]
pub async fn get_claim(
    State(state): State<AppState>,
    Path(tracking_id): Path<String>,
) -> Result<Json<ClaimDetailResponse>, ApiError> {
    let tracking_id = TrackingId::from_str(&tracking_id)
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;

    let claim = state
        .store
        .find(tracking_id.claim_id())
        .await
        .map_err(|err| {
            error!(error = %err, "Failed to look up claim");
            ApiError::storage("Failed to fetch claim", err)
        })?
        .ok_or_else(|| ApiError::NotFound(format!("Claim {tracking_id} not found")))?;

    Ok(Json(ClaimDetailResponse {
        success: true,
        claim: claim.into(),
    }))
}
