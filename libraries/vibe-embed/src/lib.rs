//! Vibe Mixer - Embedded Player Adapter
//!
//! Drives one third-party media embed (YouTube-style) from the playback
//! store in `vibe-playback`.
//!
//! This crate provides:
//! - The embed contract (`EmbedHost`, `EmbedPlayer`, `EmbedEvent`)
//! - YouTube video-id extraction from pasted links
//! - The adapter state machine (Uninitialized / ApiLoading / Ready / Instantiated)
//! - `PlayerAdapter`: store changes in, embed calls out, embed callbacks back
//! - `PlayerSession`: single-threaded event loop with position polling
//!
//! # Architecture
//!
//! Platform code implements `EmbedHost` (inject the bootstrap script,
//! construct players) and `EmbedPlayer` (the instance methods). Embed
//! callbacks are delivered to the adapter as `EmbedEvent`s, typically
//! through a `SessionHandle`.
//!
//! Only YouTube tracks are embeddable today. Other sources, and links the
//! id extractor cannot parse, are rejected with a user-facing notice.

mod adapter;
mod embed;
mod error;
mod machine;
mod session;
mod volume;
pub mod youtube;

// Public exports
pub use adapter::{EmbedOptions, PlayerAdapter, PlayerNotice, Progress};
pub use embed::{EmbedEvent, EmbedHost, EmbedPlayer, EmbedPlayerState, PlayerConfig, PlayerVars};
pub use error::{AdapterError, Result};
pub use machine::{transition, AdapterAction, AdapterInput, AdapterState, Transition};
pub use session::{
    Command, PlayerSession, SessionHandle, SessionInput, SessionUpdate, DEFAULT_POLL_INTERVAL,
};
pub use volume::{Volume, DEFAULT_VOLUME};
pub use youtube::{extract_video_id, thumbnail_url, VideoId};
