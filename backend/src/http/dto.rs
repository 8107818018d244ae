//! Data Transfer Objects for the HTTP API.
//!
//! Request and response bodies for the estimator and search endpoints live in
//! [`crate::models`] and are re-exported here.

use serde::{Deserialize, Serialize};

pub use crate::models::{
    EntryEstimate, EntryRequest, GeoPoint, NeoRecord, NeoSearchRequest, OverpressureRadii, Regime,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}
