//! HTTP handlers for the REST API.
//!
//! Bodies are taken as raw bytes and decoded through
//! [`decode_json`](crate::services::decode_json) so that type errors and range
//! violations both come back as field-level validation errors.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use tracing::debug;

use super::dto::{EntryEstimate, EntryRequest, HealthResponse, NeoRecord, NeoSearchRequest};
use super::error::AppError;
use super::state::AppState;
use crate::services::{self, decode_json};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

// =============================================================================
// Catalog Proxy
// =============================================================================

/// POST /neo/search
///
/// Query the catalog, optionally keeping only potentially hazardous asteroids.
/// An empty body means all defaults.
pub async fn search_neos(State(state): State<AppState>, body: Bytes) -> HandlerResult<Vec<NeoRecord>> {
    let request: NeoSearchRequest = if body.iter().all(u8::is_ascii_whitespace) {
        NeoSearchRequest::default()
    } else {
        decode_json(&body)?
    };
    let query = request.validate()?;
    debug!(pha = query.pha, limit = query.limit, "NEO search");

    let records = services::search_neos(state.catalog.as_ref(), query).await?;
    Ok(Json(records))
}

/// GET /neo/detail/{des}
///
/// Pass the catalog's detail record for one designation through unchanged.
pub async fn get_neo_detail(
    State(state): State<AppState>,
    Path(des): Path<String>,
) -> HandlerResult<serde_json::Value> {
    debug!(des = %des, "NEO detail lookup");
    let detail = state.catalog.lookup(&des).await?;
    Ok(Json(detail))
}

// =============================================================================
// Entry Simulation
// =============================================================================

/// POST /simulate
///
/// Estimate entry energy, regime and overpressure radii.
pub async fn simulate(body: Bytes) -> HandlerResult<EntryEstimate> {
    let request: EntryRequest = decode_json(&body)?;
    let params = request.validate()?;
    debug!(
        diameter_m = params.diameter_m,
        velocity_kms = params.velocity_kms,
        angle_deg = params.angle_deg,
        composition = %params.composition,
        "Entry simulation"
    );

    let estimate = services::estimate(&params)?;
    Ok(Json(estimate))
}
