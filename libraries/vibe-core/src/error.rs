/// Core error types for Vibe Mixer
use crate::types::TrackId;
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Vibe Mixer
#[derive(Error, Debug)]
pub enum CoreError {
    /// Link does not belong to a supported service
    #[error("Unsupported link format: {0}")]
    UnsupportedLink(String),

    /// Track not found in a playlist
    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
