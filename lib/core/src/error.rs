use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Property not found: {0}")]
    ItemNotFound(String),

    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Duplicate property: {0}")]
    DuplicateItem(String),

    #[error("Duplicate location: {0}")]
    DuplicateLocation(String),

    #[error("Invalid dimension: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Artifact not found: {0}")]
    ArtifactMissing(String),

    #[error("Artifact item lists disagree: {0}")]
    ItemMismatch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
