/// Playlist track records as stored by the backend
use crate::error::{CoreError, Result};
use crate::types::{Track, TrackId, TrackSource};
use serde::{Deserialize, Serialize};

/// Track row as returned by the persistence collaborator
///
/// `position` only determines the initial playback ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistTrack {
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

    /// Owning playlist
    pub playlist_id: String,

    /// Sort key within the playlist (ascending)
    pub position: i64,
}

impl PlaylistTrack {
    /// Create a new record
    pub fn new(
        id: impl Into<TrackId>,
        title: impl Into<String>,
        source: TrackSource,
        url: impl Into<String>,
        playlist_id: impl Into<String>,
        position: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: None,
            source,
            url: url.into(),
            playlist_id: playlist_id.into(),
            position,
        }
    }

    /// Convert into the playback `Track` shape
    pub fn into_track(self) -> Track {
        Track {
            id: self.id,
            title: self.title,
            artist: self.artist,
            source: self.source,
            url: self.url,
            thumbnail: None,
        }
    }
}

/// Direction for [`move_track`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the start of the playlist
    Up,
    /// Towards the end of the playlist
    Down,
}

/// Order records ascending by `position` and convert them into tracks
///
/// Records sharing a position keep their relative order.
pub fn playback_order(mut records: Vec<PlaylistTrack>) -> Vec<Track> {
    records.sort_by_key(|r| r.position);
    records.into_iter().map(PlaylistTrack::into_track).collect()
}

/// Swap a track's position with its neighbour
///
/// `records` must already be sorted by position; it is re-sorted after the
/// swap. Returns `Ok(false)` when the track is already at the edge it is
/// being moved towards.
pub fn move_track(records: &mut [PlaylistTrack], id: &TrackId, direction: Direction) -> Result<bool> {
    let index = records
        .iter()
        .position(|r| &r.id == id)
        .ok_or_else(|| CoreError::TrackNotFound(id.clone()))?;

    let target = match direction {
        Direction::Up if index == 0 => return Ok(false),
        Direction::Down if index + 1 == records.len() => return Ok(false),
        Direction::Up => index - 1,
        Direction::Down => index + 1,
    };

    let current_position = records[index].position;
    records[index].position = records[target].position;
    records[target].position = current_position;

    records.sort_by_key(|r| r.position);
    Ok(true)
}
