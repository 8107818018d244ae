//! In-memory catalog for tests and offline development.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use super::{CatalogError, CatalogResult, CatalogSource, QueryTable};

/// Catalog serving fixed rows and detail records.
///
/// Behaves like the upstream query API: `query` returns the first `limit`
/// rows, unfiltered.
#[derive(Debug, Clone, Default)]
pub struct LocalCatalog {
    rows: Vec<Vec<Value>>,
    details: HashMap<String, Value>,
    offline: bool,
}

impl LocalCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog whose every call fails as if the upstream were down.
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    /// Append a query row (columns in `QUERY_FIELDS` order).
    pub fn with_row(mut self, row: Vec<Value>) -> Self {
        self.rows.push(row);
        self
    }

    pub fn with_detail(mut self, designation: impl Into<String>, detail: Value) -> Self {
        self.details.insert(designation.into(), detail);
        self
    }

    fn ensure_online(&self, operation: &'static str) -> CatalogResult<()> {
        if self.offline {
            return Err(CatalogError::Unreachable {
                operation,
                message: "local catalog is offline".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogSource for LocalCatalog {
    async fn query(&self, limit: usize) -> CatalogResult<QueryTable> {
        self.ensure_online("query")?;
        Ok(QueryTable {
            data: self.rows.iter().take(limit).cloned().collect(),
        })
    }

    async fn lookup(&self, designation: &str) -> CatalogResult<Value> {
        self.ensure_online("lookup")?;
        self.details
            .get(designation)
            .cloned()
            .ok_or_else(|| CatalogError::Status {
                operation: "lookup",
                status: 404,
                body: format!("specified object was not found: {}", designation),
            })
    }
}
