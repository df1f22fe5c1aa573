//! Vibe Mixer Core
//!
//! Domain types shared by the playback store, the embed adapter and the
//! command-line driver.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `TrackId`, `TrackSource`, `PlaylistTrack`
//! - **Ordering Helpers**: `playback_order`, `move_track`
//! - **Error Handling**: `CoreError` and `Result`
//!
//! Persistence lives in a hosted backend; this crate only models the
//! records it hands back.
//!
//! # Example
//!
//! ```rust
//! use vibe_core::{playback_order, PlaylistTrack, TrackSource};
//!
//! let records = vec![
//!     PlaylistTrack::new("b", "Second", TrackSource::Youtube, "https://youtu.be/bbb", "p1", 2),
//!     PlaylistTrack::new("a", "First", TrackSource::Youtube, "https://youtu.be/aaa", "p1", 1),
//! ];
//!
//! let tracks = playback_order(records);
//! assert_eq!(tracks[0].id.as_str(), "a");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

pub use error::{CoreError, Result};
pub use types::{move_track, playback_order, Direction, PlaylistTrack, Track, TrackId, TrackSource};
