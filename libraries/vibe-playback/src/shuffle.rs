//! Shuffle for the active playlist
//!
//! Fisher-Yates over a copy of the playlist; the source ordering is never
//! touched.

use rand::seq::SliceRandom;
use rand::thread_rng;
use std::sync::Arc;
use vibe_core::Track;

/// Produce a uniformly random permutation of `tracks`
///
/// Every track appears exactly as often as it does in the input.
pub fn shuffled(tracks: &[Arc<Track>]) -> Vec<Arc<Track>> {
    let mut permutation = tracks.to_vec();
    permutation.shuffle(&mut thread_rng());
    permutation
}
