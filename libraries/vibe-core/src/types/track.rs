/// Track domain type
use crate::error::{CoreError, Result};
use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Streaming service a track link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackSource {
    /// YouTube video (embeddable)
    Youtube,
    /// Spotify track
    Spotify,
}

impl TrackSource {
    /// Classify a pasted link by the service it belongs to
    pub fn detect(url: &str) -> Result<Self> {
        if url.contains("youtube.com") || url.contains("youtu.be") {
            Ok(Self::Youtube)
        } else if url.contains("spotify.com") {
            Ok(Self::Spotify)
        } else {
            Err(CoreError::UnsupportedLink(url.to_string()))
        }
    }

    /// Human readable service name
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Youtube => "YouTube",
            Self::Spotify => "Spotify",
        }
    }
}

impl fmt::Display for TrackSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Youtube => write!(f, "youtube"),
            Self::Spotify => write!(f, "spotify"),
        }
    }
}

/// Playable track
///
/// Immutable once handed to the playback store; shared as `Arc<Track>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: Option<String>,

    /// Service the link belongs to
    pub source: TrackSource,

    /// Link to the media on its service
    pub url: String,

    /// Thumbnail image URL
    pub thumbnail: Option<String>,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(
        id: impl Into<TrackId>,
        title: impl Into<String>,
        source: TrackSource,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: None,
            source,
            url: url.into(),
            thumbnail: None,
        }
    }

    /// Set the artist name
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    /// Set the thumbnail URL
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// Artist for display, `-` when unknown
    pub fn artist_or_dash(&self) -> &str {
        self.artist.as_deref().unwrap_or("-")
    }
}
