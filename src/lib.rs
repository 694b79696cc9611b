//! # PropX
//!
//! An in-memory property similarity and proximity query engine.
//!
//! PropX loads pre-built artifacts - three pairwise similarity matrices and
//! a location distance table over a shared set of property identifiers -
//! and answers two query types over them: top-N most similar properties
//! under a fixed weighted blend, and all properties within a radius of a
//! named reference location.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install propx
//! propx --artifact-dir ./artifacts --http-port 8080
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use propx::prelude::*;
//!
//! // Load the artifact bundle and build the engine
//! let bundle = ArtifactBundle::load("./artifacts").unwrap();
//! let engine = bundle.into_recommender().unwrap();
//!
//! // Top-5 most similar properties
//! let similar = engine.recommend_similar("Emerald Court", 5).unwrap();
//!
//! // Everything strictly within 5 km of a reference location
//! let nearby = engine.find_within_radius("Cyber Hub", 5000.0).unwrap();
//! ```
//!
//! ## Crate Structure
//!
//! PropX is composed of several crates:
//!
//! - [`propx-core`](https://docs.rs/propx-core) - Matrix blending, item catalog, distance table, queries
//! - [`propx-store`](https://docs.rs/propx-store) - Artifact formats and the load-once bundle loader
//! - [`propx-api`](https://docs.rs/propx-api) - REST API
//!
//! ## Design
//!
//! - **Load once, query many**: artifacts are read at startup and never
//!   mutated afterwards, so the engine is shared without locking
//! - **Blended scoring**: the three similarity sources are combined as
//!   `0.5*facilities + 0.8*price + 1.0*location` once at load time
//! - **Strict radius**: a distance exactly equal to the radius is excluded
//! - **Stable ranking**: equal blended scores keep matrix order

// Re-export core types
pub use propx_core::{
    BlendWeights, DistanceTable, Error, ItemCatalog, NearbyItem, Recommender, Result, ScoredItem,
    SquareMatrix,
};

// Re-export artifact layer
pub use propx_store::{ArtifactBundle, DistanceArtifact, LocationColumn, SimilarityArtifact};

// Re-export API
pub use propx_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ArtifactBundle, BlendWeights, DistanceArtifact, DistanceTable, Error, ItemCatalog,
        LocationColumn, NearbyItem, Recommender, RestApi, Result, ScoredItem, SimilarityArtifact,
        SquareMatrix,
    };
}
