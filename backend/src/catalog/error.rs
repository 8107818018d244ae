//! Error types for catalog access.

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failure talking to the external catalog. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The upstream did not answer within the configured timeout.
    #[error("Catalog {operation} timed out after {timeout_secs}s")]
    Timeout {
        operation: &'static str,
        timeout_secs: u64,
    },

    /// Connection could not be established or broke mid-request.
    #[error("Catalog {operation} unreachable: {message}")]
    Unreachable {
        operation: &'static str,
        message: String,
    },

    /// The upstream answered with a non-success status.
    #[error("Catalog {operation} returned {status}: {body}")]
    Status {
        operation: &'static str,
        status: u16,
        body: String,
    },

    /// The upstream body was not in the expected shape.
    #[error("Catalog {operation} returned a malformed payload: {message}")]
    Malformed {
        operation: &'static str,
        message: String,
    },

    /// HTTP client could not be constructed.
    #[error("Catalog client configuration error: {0}")]
    Client(String),
}

impl CatalogError {
    pub fn malformed(operation: &'static str, message: impl Into<String>) -> Self {
        CatalogError::Malformed {
            operation,
            message: message.into(),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, CatalogError::Timeout { .. })
    }
}
