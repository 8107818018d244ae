//! JPL Small-Body Database client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::{CatalogError, CatalogResult, CatalogSource, QueryTable, QUERY_FIELDS};
use crate::config::CatalogSettings;

/// Longest upstream body excerpt carried in a status error.
const MAX_ERROR_BODY: usize = 512;

/// Catalog backed by the SBDB query and lookup APIs.
#[derive(Debug, Clone)]
pub struct SbdbCatalog {
    client: Client,
    query_url: String,
    lookup_url: String,
    timeout_secs: u64,
}

impl SbdbCatalog {
    /// Build a client whose requests each time out after `settings.timeout_secs`.
    pub fn new(settings: &CatalogSettings) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| CatalogError::Client(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            query_url: settings.query_url.clone(),
            lookup_url: settings.lookup_url.clone(),
            timeout_secs: settings.timeout_secs,
        })
    }

    async fn get_json(
        &self,
        operation: &'static str,
        url: &str,
        params: &[(&str, String)],
    ) -> CatalogResult<serde_json::Value> {
        debug!(operation, url, "Sending catalog request");

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.transport_error(operation, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<empty response>".to_string());
            warn!(operation, status = status.as_u16(), "Catalog returned error status");
            return Err(CatalogError::Status {
                operation,
                status: status.as_u16(),
                body: excerpt(body.trim()),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(operation, e))?;

        serde_json::from_str(&body).map_err(|e| {
            warn!(operation, error = %e, "Catalog returned non-JSON body");
            CatalogError::malformed(operation, e.to_string())
        })
    }

    fn transport_error(&self, operation: &'static str, err: reqwest::Error) -> CatalogError {
        warn!(operation, error = %err, "Catalog request failed");
        if err.is_timeout() {
            CatalogError::Timeout {
                operation,
                timeout_secs: self.timeout_secs,
            }
        } else {
            CatalogError::Unreachable {
                operation,
                message: err.to_string(),
            }
        }
    }
}

fn excerpt(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[async_trait]
impl CatalogSource for SbdbCatalog {
    async fn query(&self, limit: usize) -> CatalogResult<QueryTable> {
        let params = [
            ("sb-kind", "ast".to_string()),
            ("fields", QUERY_FIELDS.join(",")),
            ("limit", limit.to_string()),
        ];
        let value = self.get_json("query", &self.query_url, &params).await?;
        serde_json::from_value(value).map_err(|e| CatalogError::malformed("query", e.to_string()))
    }

    async fn lookup(&self, designation: &str) -> CatalogResult<serde_json::Value> {
        let params = [
            ("sstr", designation.to_string()),
            ("phys-par", "1".to_string()),
        ];
        self.get_json("lookup", &self.lookup_url, &params).await
    }
}
