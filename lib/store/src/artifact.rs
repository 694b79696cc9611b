use serde::{Deserialize, Serialize};

/// One pairwise similarity matrix as it sits on disk: the item identifiers
/// in row order, then one score row per item.
///
/// Every artifact in a bundle must carry the same item list in the same
/// order; the bundle loader enforces this.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityArtifact {
    pub items: Vec<String>,
    pub matrix: Vec<Vec<f32>>,
}

/// The distance table as it sits on disk: item identifiers in row order and
/// one meters-per-item column per named reference location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistanceArtifact {
    pub items: Vec<String>,
    pub locations: Vec<LocationColumn>,
}

/// A single distance column, aligned to the artifact's item order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationColumn {
    pub name: String,
    pub meters: Vec<f32>,
}
