//! Atmospheric-entry request, parameter and estimate types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bulk composition of the incoming body.
///
/// Carried through to the validated parameters but not yet used by the
/// estimator; density is supplied separately by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Composition {
    #[default]
    Stony,
    Iron,
    Cometary,
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Composition::Stony => "stony",
            Composition::Iron => "iron",
            Composition::Cometary => "cometary",
        };
        f.write_str(name)
    }
}

/// Raw `/simulate` request body, before range checks.
///
/// Required fields are optional here so that a missing value is reported
/// alongside every other violated constraint instead of failing decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRequest {
    #[serde(default)]
    pub diameter_m: Option<f64>,
    #[serde(default = "default_density")]
    pub density_kg_m3: f64,
    #[serde(default)]
    pub velocity_kms: Option<f64>,
    #[serde(default)]
    pub angle_deg: Option<f64>,
    #[serde(default)]
    pub composition: Composition,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lon: f64,
}

/// Default bulk density for a stony body (kg/m³).
pub const DEFAULT_DENSITY_KG_M3: f64 = 3000.0;

fn default_density() -> f64 {
    DEFAULT_DENSITY_KG_M3
}

/// Validated entry parameters.
///
/// Build these through [`EntryRequest::validate`](crate::services::validation)
/// at the boundary; the estimator assumes every range holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntryParameters {
    /// Object diameter (m)
    pub diameter_m: f64,
    /// Bulk density (kg/m³)
    pub density_kg_m3: f64,
    /// Entry speed (km/s)
    pub velocity_kms: f64,
    /// Entry angle from horizontal (degrees)
    pub angle_deg: f64,
    pub composition: Composition,
    /// Ground reference point, echoed into the estimate
    pub center: GeoPoint,
}

/// Geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Whether the body is assumed to detonate aloft or reach the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    Airburst,
    Impact,
}

/// Peak-overpressure distances from the blast center (m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverpressureRadii {
    #[serde(rename = "1psi")]
    pub psi_1: f64,
    #[serde(rename = "5psi")]
    pub psi_5: f64,
}

/// Result of the entry-effect estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntryEstimate {
    pub regime: Regime,
    /// Kinetic energy in kilotons of TNT
    pub e_kt: f64,
    pub center: GeoPoint,
    pub overpressure_radii_m: OverpressureRadii,
}
