//! Application state for the HTTP server.

use std::sync::Arc;

use crate::catalog::{CatalogResult, CatalogSource, SbdbCatalog};
use crate::config::CatalogSettings;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// External small-body catalog
    pub catalog: Arc<dyn CatalogSource>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        Self { catalog }
    }

    /// State backed by the JPL SBDB client.
    pub fn from_settings(settings: &CatalogSettings) -> CatalogResult<Self> {
        let catalog = SbdbCatalog::new(settings)?;
        Ok(Self::new(Arc::new(catalog)))
    }
}
