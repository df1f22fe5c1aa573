//! Playback store - single source of truth for what should be playing
//!
//! Every mutator is total: degenerate inputs (empty playlist, no current
//! track) are no-ops, never errors.

use crate::{events::PlaybackEvent, queue::Queue, shuffle::shuffled};
use std::sync::Arc;
use tracing::debug;
use vibe_core::Track;

/// Playback state container
///
/// Holds:
/// - Current track (what the adapter should have loaded)
/// - Active playlist and, in shuffle mode, its shuffled permutation
/// - Play/pause intent (not a guarantee that media is rendering)
/// - Auxiliary queue
///
/// Invariant: `shuffled_playlist` is `Some` only while `shuffle_mode` is on
/// and `current_playlist` is `Some`, and it always holds the same tracks as
/// `current_playlist`.
#[derive(Debug, Default)]
pub struct PlaybackStore {
    current_track: Option<Arc<Track>>,
    current_playlist: Option<Vec<Arc<Track>>>,
    shuffle_mode: bool,
    shuffled_playlist: Option<Vec<Arc<Track>>>,
    is_playing: bool,
    queue: Queue,

    // Event queue for adapter/UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackStore {
    /// Create an empty store: nothing loaded, paused, shuffle off
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Track & Playlist =====

    /// Replace the current track and start playing it
    pub fn set_current_track(&mut self, track: Arc<Track>) {
        let previous_track_id = self.current_track.as_ref().map(|t| t.id.clone());
        debug!(track_id = %track.id, "Current track set");

        self.emit(PlaybackEvent::TrackChanged {
            track_id: track.id.clone(),
            previous_track_id,
        });
        self.current_track = Some(track);
        self.set_playing(true);
    }

    /// Same transition as [`set_current_track`](Self::set_current_track)
    pub fn play_track(&mut self, track: Arc<Track>) {
        self.set_current_track(track);
    }

    /// Replace the active playlist
    ///
    /// In shuffle mode a fresh permutation of the new list is generated;
    /// otherwise the shuffled ordering is cleared.
    pub fn set_current_playlist(&mut self, tracks: Vec<Arc<Track>>) {
        debug!(length = tracks.len(), "Current playlist set");

        self.shuffled_playlist = self.shuffle_mode.then(|| shuffled(&tracks));
        self.emit(PlaybackEvent::PlaylistChanged {
            length: tracks.len(),
        });
        self.current_playlist = Some(tracks);
    }

    /// Load a playlist and start it at `start`
    ///
    /// Falls back to the first track when `start` is out of range. No-op for
    /// an empty list.
    pub fn play_playlist(&mut self, tracks: Vec<Arc<Track>>, start: usize) {
        let Some(first) = tracks.get(start).or_else(|| tracks.first()).cloned() else {
            return;
        };

        self.set_current_playlist(tracks);
        self.set_current_track(first);
    }

    // ===== Playback Control =====

    /// Flip the play/pause intent
    ///
    /// Flips even with no current track; the adapter ignores it until a
    /// track is loaded.
    pub fn toggle_play_pause(&mut self) {
        self.set_playing(!self.is_playing);
    }

    // ===== Navigation =====

    /// Advance within the active ordering, wrapping to the first track
    ///
    /// No-op without a current track. A current track that is not part of
    /// the ordering restarts from the first track.
    pub fn play_next_track(&mut self) {
        let Some(next) = self.neighbour(|index, len| match index {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        }) else {
            debug!("Next requested with no current track or ordering");
            return;
        };

        self.set_current_track(next);
    }

    /// Step back within the active ordering, wrapping to the last track
    pub fn play_previous_track(&mut self) {
        let Some(previous) = self.neighbour(|index, len| match index {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        }) else {
            debug!("Previous requested with no current track or ordering");
            return;
        };

        self.set_current_track(previous);
    }

    /// Pick a track from the active ordering
    ///
    /// `pick` receives the current track's index (if found) and the non-zero
    /// ordering length. Returns `None` when there is no current track.
    fn neighbour(&self, pick: impl Fn(Option<usize>, usize) -> usize) -> Option<Arc<Track>> {
        let current = self.current_track.as_ref()?;
        let ordering = self.active_ordering().filter(|o| !o.is_empty())?;

        let index = ordering.iter().position(|t| t.id == current.id);

        ordering.get(pick(index, ordering.len())).cloned()
    }

    // ===== Shuffle =====

    /// Toggle shuffle mode
    ///
    /// Enabling without a playlist sets the flag and leaves the shuffled
    /// ordering empty until a playlist is set.
    pub fn toggle_shuffle_mode(&mut self) {
        if self.shuffle_mode {
            self.shuffle_mode = false;
            self.shuffled_playlist = None;
        } else {
            self.shuffle_mode = true;
            self.shuffled_playlist = self.current_playlist.as_deref().map(shuffled);
        }

        debug!(enabled = self.shuffle_mode, "Shuffle toggled");
        self.emit(PlaybackEvent::ShuffleChanged {
            enabled: self.shuffle_mode,
        });
    }

    // ===== Queue =====

    /// Append a track to the queue
    pub fn add_to_queue(&mut self, track: Arc<Track>) {
        self.queue.push(track);
        self.emit(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    /// Remove every queued track
    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.emit(PlaybackEvent::QueueChanged { length: 0 });
    }

    // ===== State Queries =====

    /// Get the current track
    pub fn current_track(&self) -> Option<&Arc<Track>> {
        self.current_track.as_ref()
    }

    /// Get the active playlist in its original order
    pub fn current_playlist(&self) -> Option<&[Arc<Track>]> {
        self.current_playlist.as_deref()
    }

    /// Get the shuffled permutation (shuffle mode only)
    pub fn shuffled_playlist(&self) -> Option<&[Arc<Track>]> {
        self.shuffled_playlist.as_deref()
    }

    /// Ordering used by next/previous
    pub fn active_ordering(&self) -> Option<&[Arc<Track>]> {
        match (&self.shuffled_playlist, self.shuffle_mode) {
            (Some(order), true) => Some(order.as_slice()),
            _ => self.current_playlist.as_deref(),
        }
    }

    /// Whether shuffle mode is on
    pub fn shuffle_mode(&self) -> bool {
        self.shuffle_mode
    }

    /// Play/pause intent
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Get the queue
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// Whether the UI must render a player surface
    pub fn needs_player_surface(&self) -> bool {
        self.current_track.is_some()
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns every event recorded since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn set_playing(&mut self, is_playing: bool) {
        if self.is_playing == is_playing {
            return;
        }
        self.is_playing = is_playing;
        self.emit(PlaybackEvent::PlayingChanged { is_playing });
    }

    fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }
}
