//! Auxiliary play queue
//!
//! Tracks the user asked to hear, kept apart from the active playlist.
//! Navigation does not consult it.

use std::sync::Arc;
use vibe_core::Track;

/// Ordered list of user-queued tracks
#[derive(Debug, Clone, Default)]
pub struct Queue {
    tracks: Vec<Arc<Track>>,
}

impl Queue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a track to the end
    pub fn push(&mut self, track: Arc<Track>) {
        self.tracks.push(track);
    }

    /// Remove every track
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Get all tracks in queue order
    pub fn tracks(&self) -> &[Arc<Track>] {
        &self.tracks
    }

    /// Get queue length
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
