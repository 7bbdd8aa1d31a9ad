//! Error types for the vector database

use thiserror::Error;

/// Result type alias for vector database operations
pub type Result<T> = std::result::Result<T, VectorDbError>;

/// Error kinds surfaced by the core.
///
/// Every variant is a deterministic validation failure or a registry
/// lookup failure; nothing here is transient, so nothing is retried.
#[derive(Error, Debug)]
pub enum VectorDbError {
    #[error("collection name must not be empty")]
    EmptyCollectionName,

    #[error("dimension must be > 0")]
    InvalidDimension,

    #[error("unknown distance metric: {name:?} (expected: cosine, dot, l2)")]
    UnknownMetric { name: String },

    #[error("point id must not be empty")]
    EmptyPointId,

    #[error("k must be > 0")]
    InvalidK,

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("collection not found: {name:?}")]
    CollectionNotFound { name: String },

    #[error("collection already exists: {name:?}")]
    CollectionExists { name: String },
}
