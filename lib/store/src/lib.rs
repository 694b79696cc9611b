//! # PropX Store
//!
//! Artifact layer for the PropX recommendation engine.
//!
//! The engine's inputs are pre-built, read-only artifacts: three pairwise
//! similarity matrices and one distance table, all keyed by the same item
//! identifiers. This crate defines their on-disk shape and loads them once
//! at startup:
//!
//! - [`SimilarityArtifact`] / [`DistanceArtifact`] - serde renditions of the
//!   artifact files
//! - [`ArtifactBundle`] - reads a directory, validates that every artifact
//!   agrees on the item list, and builds the core
//!   [`Recommender`](propx_core::Recommender)
//!
//! Artifacts are stored as `.json` (serde_json) or `.bin` (bincode),
//! resolved per file stem at load time. Nothing in this crate writes.

pub mod artifact;
pub mod bundle;

pub use artifact::{DistanceArtifact, LocationColumn, SimilarityArtifact};
pub use bundle::{ArtifactBundle, DISTANCE_STEM, SIMILARITY_STEMS};
