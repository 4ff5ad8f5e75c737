//! HTTP API Layer
//!
//! Accepts giveaway claim submissions and exposes the stored claims.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for claims and health
//! - **Middleware**: Request logging
//! - **DTOs**: Response bodies
//! - **Error Handling**: The `{ success: false, message, error? }` envelope
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(store, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    http::{HeaderName, HeaderValue},
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_claims::ClaimStore;

use crate::config::ApiConfig;
use crate::handlers::{claims, health};
use crate::middleware::{request_logging, REQUEST_ID_HEADER};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ClaimStore>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `store` - Claim store every claims route reads from and writes to
/// * `config` - API configuration
pub fn create_router(store: Arc<dyn ClaimStore>, config: ApiConfig) -> Router {
    let cors = cors_layer(&config.cors_origins);
    let state = AppState { store, config };
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let health_routes = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let claims_routes = Router::new()
        .route("/claim", post(claims::submit_claim))
        .route("/submit-claim", post(claims::submit_claim))
        .route("/claims", get(claims::list_claims))
        .route("/claims/:tracking_id", get(claims::get_claim));

    Router::new()
        .merge(health_routes)
        .merge(claims_routes)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Allows any origin unless specific origins are configured
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin.trim()).ok())
        .collect();

    let origin = if allowed.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
