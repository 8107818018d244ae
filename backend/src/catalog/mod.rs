//! External small-body catalog access.
//!
//! The service never stores catalog data; it forwards one query or lookup per
//! request through a [`CatalogSource`]. [`SbdbCatalog`] talks to the JPL
//! Small-Body Database over HTTP, [`LocalCatalog`] serves fixed data in-process
//! for tests and offline development.

pub mod error;
pub mod local;
pub mod sbdb;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use error::{CatalogError, CatalogResult};
pub use local::LocalCatalog;
pub use sbdb::SbdbCatalog;

/// Columns requested from the query API, in row order.
pub const QUERY_FIELDS: [&str; 6] = ["des", "shortname", "spkid", "diameter", "albedo", "pha"];

/// Tabular query result: one JSON array per body, columns in [`QUERY_FIELDS`] order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryTable {
    #[serde(default)]
    pub data: Vec<Vec<serde_json::Value>>,
}

/// Source of small-body catalog data.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch up to `limit` asteroid rows.
    async fn query(&self, limit: usize) -> CatalogResult<QueryTable>;

    /// Fetch the detail record for one designation, unchanged.
    async fn lookup(&self, designation: &str) -> CatalogResult<serde_json::Value>;
}
