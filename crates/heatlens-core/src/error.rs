//! Error types for heatlens

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeatlensError {
    // Registry errors
    #[error("Cluster not found: {id}")]
    ClusterNotFound { id: String },

    #[error("Duplicate cluster id in registry: {id}")]
    DuplicateCluster { id: String },

    // Layer errors
    #[error("Unknown layer: {name}")]
    UnknownLayer { name: String },

    // Surface errors
    #[error("Map surface initialization failed: {reason}")]
    SurfaceInitFailed { reason: String },

    // Geometry errors
    #[error("Malformed boundary for cluster {cluster}: {points} point(s), need at least 3")]
    MalformedBoundary { cluster: String, points: usize },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, HeatlensError>;
