//! Boundary validation for request bodies.
//!
//! Every violated constraint is collected into a single [`ValidationError`]
//! so the caller sees all field problems at once. Nothing that fails here
//! ever reaches the estimator or the catalog.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{
    EntryParameters, EntryRequest, GeoPoint, NeoSearchQuery, NeoSearchRequest, MAX_SEARCH_LIMIT,
};

/// A single field-level constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Dotted path of the offending field (`.` for the whole body)
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Request body failed its declared constraints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid request: {}", summarize(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(field, message)],
        }
    }
}

/// Collects field errors while checking a request.
#[derive(Debug, Default)]
struct Checker {
    errors: Vec<FieldError>,
}

#[allow(clippy::neg_cmp_op_on_partial_ord)]
impl Checker {
    fn greater_than(&mut self, field: &str, value: f64, min: f64) {
        if !(value > min) {
            self.errors
                .push(FieldError::new(field, format!("must be greater than {}", min)));
        }
    }

    fn exclusive_range(&mut self, field: &str, value: f64, min: f64, max: f64) {
        if !(value > min && value < max) {
            self.errors.push(FieldError::new(
                field,
                format!("must be greater than {} and less than {}", min, max),
            ));
        }
    }

    fn inclusive_range(&mut self, field: &str, value: f64, min: f64, max: f64) {
        if !(min..=max).contains(&value) {
            self.errors.push(FieldError::new(
                field,
                format!("must be between {} and {} inclusive", min, max),
            ));
        }
    }

    fn required(&mut self, field: &str, value: Option<f64>) -> f64 {
        match value {
            Some(v) => v,
            None => {
                self.errors.push(FieldError::new(field, "field required"));
                f64::NAN
            }
        }
    }

    fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }
}

impl EntryRequest {
    /// Check every field constraint and produce estimator input.
    pub fn validate(&self) -> Result<EntryParameters, ValidationError> {
        let mut check = Checker::default();

        let diameter_m = check.required("diameter_m", self.diameter_m);
        let velocity_kms = check.required("velocity_kms", self.velocity_kms);
        let angle_deg = check.required("angle_deg", self.angle_deg);

        if self.diameter_m.is_some() {
            check.greater_than("diameter_m", diameter_m, 1.0);
        }
        check.greater_than("density_kg_m3", self.density_kg_m3, 100.0);
        if self.velocity_kms.is_some() {
            check.greater_than("velocity_kms", velocity_kms, 1.0);
        }
        if self.angle_deg.is_some() {
            check.exclusive_range("angle_deg", angle_deg, 5.0, 90.0);
        }
        check.inclusive_range("lat", self.lat, -90.0, 90.0);
        check.inclusive_range("lon", self.lon, -180.0, 180.0);

        check.finish(EntryParameters {
            diameter_m,
            density_kg_m3: self.density_kg_m3,
            velocity_kms,
            angle_deg,
            composition: self.composition,
            center: GeoPoint {
                lat: self.lat,
                lon: self.lon,
            },
        })
    }
}

impl NeoSearchRequest {
    pub fn validate(&self) -> Result<NeoSearchQuery, ValidationError> {
        if !(1..=MAX_SEARCH_LIMIT).contains(&self.limit) {
            return Err(ValidationError::single(
                "limit",
                format!("must be between 1 and {} inclusive", MAX_SEARCH_LIMIT),
            ));
        }
        Ok(NeoSearchQuery {
            pha: self.pha,
            limit: self.limit as usize,
        })
    }
}

/// Decode a JSON body, reporting the failing field path on error.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ValidationError> {
    let de = &mut serde_json::Deserializer::from_slice(body);
    serde_path_to_error::deserialize(de).map_err(|err| {
        let path = err.path().to_string();
        ValidationError::single(path, err.into_inner().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Composition;

    fn request() -> EntryRequest {
        EntryRequest {
            diameter_m: Some(20.0),
            density_kg_m3: 3000.0,
            velocity_kms: Some(19.0),
            angle_deg: Some(30.0),
            composition: Composition::Stony,
            lat: 0.0,
            lon: 0.0,
        }
    }

    fn fields(err: &ValidationError) -> Vec<&str> {
        err.errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_request_passes() {
        let params = request().validate().unwrap();
        assert_eq!(params.diameter_m, 20.0);
        assert_eq!(params.center, GeoPoint { lat: 0.0, lon: 0.0 });
    }

    #[test]
    fn test_diameter_bound_is_exclusive() {
        let mut req = request();
        req.diameter_m = Some(1.0);
        let err = req.validate().unwrap_err();
        assert_eq!(fields(&err), vec!["diameter_m"]);

        req.diameter_m = Some(1.0001);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_angle_bounds_are_exclusive() {
        let mut req = request();
        for angle in [5.0, 90.0, 0.0, 120.0] {
            req.angle_deg = Some(angle);
            let err = req.validate().unwrap_err();
            assert_eq!(fields(&err), vec!["angle_deg"], "angle {}", angle);
        }
        req.angle_deg = Some(89.99);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_coordinate_bounds_are_inclusive() {
        let mut req = request();
        req.lat = -90.0;
        req.lon = 180.0;
        assert!(req.validate().is_ok());

        req.lat = 90.5;
        req.lon = -180.5;
        let err = req.validate().unwrap_err();
        assert_eq!(fields(&err), vec!["lat", "lon"]);
    }

    #[test]
    fn test_all_violations_are_collected() {
        let req = EntryRequest {
            diameter_m: None,
            density_kg_m3: 50.0,
            velocity_kms: Some(0.5),
            angle_deg: None,
            composition: Composition::Iron,
            lat: 0.0,
            lon: 0.0,
        };
        let err = req.validate().unwrap_err();
        assert_eq!(
            fields(&err),
            vec!["diameter_m", "angle_deg", "density_kg_m3", "velocity_kms"]
        );
        assert!(err.to_string().contains("diameter_m: field required"));
    }

    #[test]
    fn test_search_limit_range() {
        let ok = NeoSearchRequest { pha: true, limit: 100 }.validate().unwrap();
        assert_eq!(ok, NeoSearchQuery { pha: true, limit: 100 });

        for limit in [0, 101, -3] {
            let err = NeoSearchRequest { pha: false, limit }.validate().unwrap_err();
            assert_eq!(fields(&err), vec!["limit"]);
        }
    }

    #[test]
    fn test_decode_reports_field_path() {
        let err = decode_json::<EntryRequest>(br#"{"diameter_m": "big"}"#).unwrap_err();
        assert_eq!(err.errors[0].field, "diameter_m");

        let err = decode_json::<EntryRequest>(br#"{"composition": "granite"}"#).unwrap_err();
        assert_eq!(err.errors[0].field, "composition");
    }

    #[test]
    fn test_decode_malformed_json() {
        let err = decode_json::<NeoSearchRequest>(b"{not json").unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, ".");
    }
}
