//! Vibe Mixer - Playback State
//!
//! Media-backend-agnostic playback state for Vibe Mixer.
//!
//! This crate provides:
//! - Current track / active playlist selection
//! - Shuffle mode with a derived shuffled ordering
//! - Next/previous navigation with wrap-around
//! - Play/pause intent flag
//! - An auxiliary queue the user can append to
//! - Change events for whoever drives the actual media player
//!
//! # Architecture
//!
//! `vibe-playback` performs no I/O. It does not know which embed plays the
//! track; `vibe-embed` observes [`PlaybackStore::drain_events`] and drives
//! the external player.
//!
//! There is no global store: create one [`PlaybackStore`] at application
//! start and pass it by `&mut` to whoever needs to mutate it.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use vibe_core::{Track, TrackSource};
//! use vibe_playback::PlaybackStore;
//!
//! let tracks: Vec<Arc<Track>> = ["a", "b", "c"]
//!     .iter()
//!     .map(|id| Arc::new(Track::new(*id, *id, TrackSource::Youtube, format!("https://youtu.be/{}", id))))
//!     .collect();
//!
//! let mut store = PlaybackStore::new();
//! store.set_current_playlist(tracks.clone());
//! store.set_current_track(Arc::clone(&tracks[0]));
//!
//! store.play_next_track();
//! assert_eq!(store.current_track().unwrap().id.as_str(), "b");
//!
//! store.play_previous_track();
//! store.play_previous_track();
//! assert_eq!(store.current_track().unwrap().id.as_str(), "c");
//! ```

mod events;
mod queue;
mod shuffle;
mod store;

// Public exports
pub use events::PlaybackEvent;
pub use queue::Queue;
pub use shuffle::shuffled;
pub use store::PlaybackStore;
