//! Playback Events
//!
//! Change notifications recorded by every store mutator. The embed adapter
//! drains them to decide which effects to apply on the external player:
//! - Track changes (load new media)
//! - Play/pause intent changes
//! - Playlist, shuffle and queue changes (UI refresh only)

use serde::{Deserialize, Serialize};
use vibe_core::TrackId;

/// Events emitted by the playback store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Current track was replaced
    ///
    /// Emitted even when the same track is selected again, since selecting
    /// a track restarts it.
    TrackChanged {
        /// ID of the new (current) track
        track_id: TrackId,
        /// ID of the previous track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// Play/pause intent flipped
    PlayingChanged {
        /// New intent
        is_playing: bool,
    },

    /// Active playlist replaced
    PlaylistChanged {
        /// New playlist length
        length: usize,
    },

    /// Shuffle toggled
    ShuffleChanged {
        /// Whether shuffle is now on
        enabled: bool,
    },

    /// Queue changed (track appended or cleared)
    QueueChanged {
        /// New queue length
        length: usize,
    },
}

impl PlaybackEvent {
    /// Whether the event requires the media player to load something new
    pub fn is_track_change(&self) -> bool {
        matches!(self, Self::TrackChanged { .. })
    }
}
