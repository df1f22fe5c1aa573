/// Playlist files and link inspection
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use vibe_core::{playback_order, CoreError, PlaylistTrack, Track, TrackSource};
use vibe_embed::{extract_video_id, thumbnail_url};

/// Load a JSON array of playlist records in playback order
///
/// YouTube tracks get their thumbnail filled in.
pub fn load_playlist(path: &Path) -> Result<Vec<Arc<Track>>> {
    let contents = std::fs::read_to_string(path)?;
    let records: Vec<PlaylistTrack> =
        serde_json::from_str(&contents).map_err(CoreError::from)?;

    if records.is_empty() {
        return Err(CliError::EmptyPlaylist(path.to_path_buf()));
    }

    let tracks = playback_order(records)
        .into_iter()
        .map(|track| Arc::new(with_youtube_thumbnail(track)))
        .collect();
    Ok(tracks)
}

fn with_youtube_thumbnail(track: Track) -> Track {
    if track.source != TrackSource::Youtube || track.thumbnail.is_some() {
        return track;
    }

    match extract_video_id(&track.url) {
        Ok(id) => track.with_thumbnail(thumbnail_url(&id)),
        Err(_) => track,
    }
}

/// What the player can tell about a pasted link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkInfo {
    pub source: TrackSource,
    pub video_id: Option<String>,
    pub thumbnail: Option<String>,
}

/// Detect the service behind `url` and, for YouTube, its video id
pub fn inspect_link(url: &str) -> Result<LinkInfo> {
    let source = TrackSource::detect(url)?;

    let (video_id, thumbnail) = match source {
        TrackSource::Youtube => {
            let id = extract_video_id(url)?;
            (Some(id.to_string()), Some(thumbnail_url(&id)))
        }
        TrackSource::Spotify => (None, None),
    };

    Ok(LinkInfo {
        source,
        video_id,
        thumbnail,
    })
}
