/// Core domain types for Vibe Mixer
mod ids;
mod playlist;
mod track;

pub use ids::TrackId;
pub use playlist::{move_track, playback_order, Direction, PlaylistTrack};
pub use track::{Track, TrackSource};
