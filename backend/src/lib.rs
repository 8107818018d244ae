//! # MeteorGuard Backend
//!
//! Small HTTP API for asteroid threat exploration.
//!
//! The service proxies search and detail queries to the JPL Small-Body
//! Database and estimates the atmospheric-entry effects of a body from its
//! size, density, speed and entry angle. It keeps no state between requests.
//!
//! ## Architecture
//!
//! - [`models`]: request, parameter and result types
//! - [`services`]: entry-effect estimator, search shaping, boundary validation
//! - [`catalog`]: external catalog access (`SbdbCatalog`, `LocalCatalog`)
//! - [`config`]: TOML and environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!

pub mod catalog;
pub mod config;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
