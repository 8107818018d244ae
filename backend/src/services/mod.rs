//! Business logic behind the HTTP endpoints.
//!
//! - [`entry_effects`]: the pure atmospheric-entry estimator
//! - [`neo_search`]: shaping catalog query rows into search results
//! - [`validation`]: request checks run once at the boundary

pub mod entry_effects;
pub mod neo_search;
pub mod validation;

pub use entry_effects::{estimate, DomainError};
pub use neo_search::search_neos;
pub use validation::{decode_json, FieldError, ValidationError};
