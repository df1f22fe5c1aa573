//! Error types for the embed adapter

use thiserror::Error;
use vibe_core::TrackSource;

/// Adapter errors
///
/// All of them are terminal at the adapter boundary: they are logged and
/// surfaced as a notice, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// Track source has no embeddable player
    #[error("Unsupported source: {0} tracks cannot be played here yet")]
    UnsupportedSource(TrackSource),

    /// Video identifier could not be extracted from the link
    #[error("Malformed URL: {0}")]
    MalformedUrl(String),

    /// External player reported a playback error
    #[error("Player error (code {code})")]
    ExternalPlayer {
        /// Error code as reported by the embed
        code: i32,
    },

    /// Embed host failed to create a player instance
    #[error("Embed error: {0}")]
    Embed(String),
}

/// Result type for adapter operations
pub type Result<T> = std::result::Result<T, AdapterError>;
