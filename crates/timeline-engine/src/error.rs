//! Error types for timeline-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// The stored event document was not valid JSON. Individual malformed
    /// records inside a valid document are not errors; they degrade in place.
    #[error("Event JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
