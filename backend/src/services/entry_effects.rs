//! Simplified asteroid atmospheric-entry effect estimate.
//!
//! Kinetic energy of a uniform sphere, a two-predicate airburst/impact
//! classification and cube-root scaling of the overpressure radii. The
//! composition tag is not used yet; density comes from the caller.

use std::f64::consts::PI;

use crate::models::{EntryEstimate, EntryParameters, OverpressureRadii, Regime};

/// Joules per kiloton of TNT.
pub const JOULES_PER_KILOTON: f64 = 4.184e12;

/// Bodies at least this wide (m) are treated as reaching the ground.
pub const AIRBURST_MAX_DIAMETER_M: f64 = 50.0;

/// Entries at least this steep (degrees) are treated as reaching the ground.
pub const AIRBURST_MAX_ANGLE_DEG: f64 = 45.0;

/// 5 psi radius (m) per cube root of kiloton.
pub const RADIUS_5PSI_M_PER_CBRT_KT: f64 = 1000.0;

/// 1 psi radius as a multiple of the 5 psi radius.
pub const RADIUS_1PSI_FACTOR: f64 = 2.5;

/// Degenerate input reached the estimator.
///
/// Boundary validation rules these out, so seeing one means a caller skipped
/// [`EntryRequest::validate`](crate::models::EntryRequest).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("kinetic energy overflowed for the given parameters")]
    EnergyOverflow,
}

/// Estimate entry energy, regime and blast radii.
pub fn estimate(p: &EntryParameters) -> Result<EntryEstimate, DomainError> {
    check_inputs(p)?;

    let e_kt = kinetic_energy_kt(p.diameter_m, p.density_kg_m3, p.velocity_kms);
    if !e_kt.is_finite() {
        return Err(DomainError::EnergyOverflow);
    }

    let psi_5 = e_kt.cbrt() * RADIUS_5PSI_M_PER_CBRT_KT;

    Ok(EntryEstimate {
        regime: classify_regime(p.diameter_m, p.angle_deg),
        e_kt,
        center: p.center,
        overpressure_radii_m: OverpressureRadii {
            psi_1: psi_5 * RADIUS_1PSI_FACTOR,
            psi_5,
        },
    })
}

/// Kinetic energy of a uniform sphere in kilotons of TNT.
pub fn kinetic_energy_kt(diameter_m: f64, density_kg_m3: f64, velocity_kms: f64) -> f64 {
    let r = diameter_m / 2.0;
    let volume = 4.0 / 3.0 * PI * r.powi(3);
    let mass = volume * density_kg_m3;
    let v = velocity_kms * 1000.0;
    let ke_j = 0.5 * mass * v * v;
    ke_j / JOULES_PER_KILOTON
}

pub fn classify_regime(diameter_m: f64, angle_deg: f64) -> Regime {
    if diameter_m < AIRBURST_MAX_DIAMETER_M && angle_deg < AIRBURST_MAX_ANGLE_DEG {
        Regime::Airburst
    } else {
        Regime::Impact
    }
}

fn check_inputs(p: &EntryParameters) -> Result<(), DomainError> {
    let finite = [
        ("diameter_m", p.diameter_m),
        ("density_kg_m3", p.density_kg_m3),
        ("velocity_kms", p.velocity_kms),
        ("angle_deg", p.angle_deg),
        ("lat", p.center.lat),
        ("lon", p.center.lon),
    ];
    if let Some(&(field, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
        return Err(DomainError::NonFinite { field, value });
    }

    let positive = [
        ("diameter_m", p.diameter_m),
        ("density_kg_m3", p.density_kg_m3),
        ("velocity_kms", p.velocity_kms),
    ];
    if let Some(&(field, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
        return Err(DomainError::NonPositive { field, value });
    }

    Ok(())
}
