//! # PropX Core
//!
//! Core library for the PropX property recommendation engine.
//!
//! This crate provides the fundamental data structures and queries:
//!
//! - [`SquareMatrix`] - Dense square score matrix with scale/add blending
//! - [`ItemCatalog`] - Ordered property identifiers mapped to matrix rows
//! - [`DistanceTable`] - Per-location distance columns in meters
//! - [`Recommender`] - Top-N similarity and within-radius queries
//!
//! All data is loaded once and never mutated, so a shared [`Recommender`]
//! serves concurrent queries without locking.
//!
//! ## Example
//!
//! ```rust
//! use propx_core::{DistanceTable, ItemCatalog, Recommender, SquareMatrix};
//!
//! let catalog = ItemCatalog::new(vec![
//!     "A".to_string(),
//!     "B".to_string(),
//!     "C".to_string(),
//! ]).unwrap();
//!
//! let sim = SquareMatrix::from_rows(vec![
//!     vec![1.0, 0.2, 0.9],
//!     vec![0.2, 1.0, 0.3],
//!     vec![0.9, 0.3, 1.0],
//! ]).unwrap();
//!
//! let distances = DistanceTable::from_columns(&catalog, vec![
//!     ("Downtown".to_string(), vec![4000.0, 6000.0, 9000.0]),
//! ]).unwrap();
//!
//! let engine = Recommender::new(
//!     catalog, sim.clone(), sim.clone(), sim, distances,
//! ).unwrap();
//!
//! let similar = engine.recommend_similar("A", 2).unwrap();
//! assert_eq!(similar[0].id, "C");
//!
//! let nearby = engine.find_within_radius("Downtown", 5000.0).unwrap();
//! assert_eq!(nearby.len(), 1);
//! ```

pub mod catalog;
pub mod distance;
pub mod error;
pub mod matrix;
pub mod recommender;

pub use catalog::ItemCatalog;
pub use distance::DistanceTable;
pub use error::{Error, Result};
pub use matrix::SquareMatrix;
pub use recommender::{BlendWeights, NearbyItem, Recommender, ScoredItem};
