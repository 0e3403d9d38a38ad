//! HTTP routes of the terms gateway.
//!
//! | Route | Purpose |
//! |-------|---------|
//! | `GET /terms` | Current content and its hash |
//! | `PUT /terms` | Replace content, authorized by a signed challenge |
//! | `POST /terms/challenge` | Build the challenge a signer must sign |
//! | `GET /health` | Liveness |

use crate::domain::config::GatewayConfig;
use crate::domain::error::{ApiError, ApiResult};
use crate::domain::types::{
    ChallengeRequest, ChallengeResponse, TermsResponse, UpdateTermsRequest, UpdateTermsResponse,
};
use crate::middleware::{create_cors_layer, TracingLayer};
use crate::ports::outbound::{SignerAuthority, TermsStore};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use gt_01_challenge_auth::ChallengeAuthApi;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{error, info, warn};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn ChallengeAuthApi>,
    pub store: Arc<dyn TermsStore>,
    pub authority: Arc<dyn SignerAuthority>,
}

/// Build the HTTP router with its middleware stack.
pub fn build_router(state: AppState, config: &GatewayConfig) -> Router {
    // Layers added later wrap earlier ones: Tracing → CORS → BodyLimit → Handler.
    Router::new()
        .route("/terms", get(get_terms).put(update_terms))
        .route("/terms/challenge", post(create_challenge))
        .route("/health", get(health_check))
        .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
        .layer(create_cors_layer(&config.cors))
        .layer(TracingLayer::new())
        .with_state(state)
}

fn parse_body<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body)
        .map_err(|e| ApiError::bad_request(format!("Invalid request body: {}", e)))
}

async fn resolve_signer(state: &AppState) -> ApiResult<String> {
    state.authority.expected_signer().await.map_err(|e| {
        error!(error = %e, "Failed to resolve authorized signer");
        ApiError::internal("authorized signer unavailable")
    })
}

async fn get_terms(State(state): State<AppState>) -> ApiResult<Json<TermsResponse>> {
    let content = state.store.load().await.map_err(|e| {
        error!(error = %e, "Failed to load terms");
        ApiError::internal("failed to load terms")
    })?;

    let content_hash = content.as_deref().map(|c| state.auth.hash_content_hex(c));
    Ok(Json(TermsResponse {
        content,
        content_hash,
    }))
}

async fn create_challenge(
    State(state): State<AppState>,
    body: String,
) -> ApiResult<Json<ChallengeResponse>> {
    let request: ChallengeRequest = parse_body(&body)?;

    let expected = resolve_signer(&state).await?;
    if request.address != expected {
        warn!(address = %request.address, "Challenge requested by unauthorized address");
        return Err(ApiError::forbidden("Address is not authorized to update terms"));
    }

    let content_hash = state.auth.hash_content_hex(&request.content);
    let challenge = state
        .auth
        .build_challenge(&request.address, &content_hash)
        .map_err(|e| {
            error!(error = %e, "Failed to build challenge");
            ApiError::internal("failed to build challenge")
        })?;

    Ok(Json(ChallengeResponse {
        challenge,
        content_hash,
    }))
}

/// `PUT /terms`: verify, then persist only on acceptance.
async fn update_terms(
    State(state): State<AppState>,
    body: String,
) -> ApiResult<Json<UpdateTermsResponse>> {
    let request: UpdateTermsRequest = parse_body(&body)?;

    let expected = resolve_signer(&state).await?;
    if request.address != expected {
        warn!(address = %request.address, "Terms update from unauthorized address");
        return Err(ApiError::forbidden("Address is not authorized to update terms"));
    }

    state
        .auth
        .verify_challenge_response(&request.arc60, &expected, &request.content)
        .into_result()
        .map_err(ApiError::unauthorized)?;

    state.store.save(&request.content).await.map_err(|e| {
        error!(error = %e, "Failed to persist verified terms");
        ApiError::internal("failed to persist terms")
    })?;

    info!(
        signer = %expected,
        bytes = request.content.len(),
        "Terms updated"
    );
    Ok(Json(UpdateTermsResponse { success: true }))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
    }))
}
