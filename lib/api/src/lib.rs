//! # PropX API
//!
//! REST API for the PropX recommendation engine.
//!
//! Serves the loaded, immutable [`Recommender`](propx_core::Recommender)
//! over HTTP:
//!
//! - `GET /healthz` - liveness plus property/location counts
//! - `GET /properties` - property identifiers, sorted
//! - `GET /properties/{id}/similar?limit=N` - top-N similar properties
//! - `GET /locations` - reference location names, sorted
//! - `GET /locations/{name}/nearby?radius_km=R` - properties within radius
//!
//! Unit conversion and display rounding happen here, at the presentation
//! edge: radii arrive in kilometers and are converted to the table's meters,
//! and responses carry rounded display values alongside the raw numbers.
//! Lookup failures map to 404 with a JSON error body.

pub mod rest;

pub use rest::RestApi;
