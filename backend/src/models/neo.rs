//! Near-Earth object search types.

use serde::{Deserialize, Serialize};

/// Default number of records returned by a search.
pub const DEFAULT_SEARCH_LIMIT: i64 = 20;
/// Largest accepted search limit.
pub const MAX_SEARCH_LIMIT: i64 = 100;

/// Raw `/neo/search` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeoSearchRequest {
    /// Only return potentially hazardous asteroids
    #[serde(default)]
    pub pha: bool,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_SEARCH_LIMIT
}

impl Default for NeoSearchRequest {
    fn default() -> Self {
        Self {
            pha: false,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

/// Validated search filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeoSearchQuery {
    pub pha: bool,
    /// Always within `1..=MAX_SEARCH_LIMIT`
    pub limit: usize,
}

/// One small body from the catalog query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoRecord {
    /// Primary designation
    pub des: String,
    /// Short name, when the body has one
    pub name: Option<String>,
    /// JPL SPK-ID
    pub spkid: Option<String>,
    /// Diameter (km), null when unknown
    pub diameter: Option<f64>,
    /// Geometric albedo, null when unknown
    pub albedo: Option<f64>,
    /// Upstream PHA flag ("Y"/"N")
    pub pha: Option<String>,
}

impl NeoRecord {
    /// True when the catalog marks this body as potentially hazardous.
    pub fn is_pha(&self) -> bool {
        self.pha
            .as_deref()
            .is_some_and(|flag| flag.eq_ignore_ascii_case("y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pha: Option<&str>) -> NeoRecord {
        NeoRecord {
            des: "433".to_string(),
            name: Some("433 Eros".to_string()),
            spkid: Some("2000433".to_string()),
            diameter: Some(16.84),
            albedo: None,
            pha: pha.map(str::to_string),
        }
    }

    #[test]
    fn test_is_pha_case_insensitive() {
        assert!(record(Some("Y")).is_pha());
        assert!(record(Some("y")).is_pha());
        assert!(!record(Some("N")).is_pha());
        assert!(!record(None).is_pha());
    }

    #[test]
    fn test_search_request_defaults() {
        let req: NeoSearchRequest = serde_json::from_str("{}").unwrap();
        assert!(!req.pha);
        assert_eq!(req.limit, 20);
    }
}
