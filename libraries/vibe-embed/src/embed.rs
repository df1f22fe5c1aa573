//! External player embed contract
//!
//! The adapter never talks to a concrete widget. Platforms provide an
//! [`EmbedHost`] (bootstraps the embed API and constructs players) and the
//! [`EmbedPlayer`] instances it creates. Callbacks from the widget come back
//! to the adapter as [`EmbedEvent`]s.

use crate::error::Result;
use crate::youtube::VideoId;
use serde::{Deserialize, Serialize};

/// Embed URL parameters (`playerVars`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerVars {
    pub autoplay: u8,
    pub controls: u8,
    pub disablekb: u8,
    pub fs: u8,
    pub modestbranding: u8,
    pub rel: u8,
    pub showinfo: u8,
}

impl PlayerVars {
    /// Hidden, chrome-less player; the UI supplies its own transport controls
    pub fn headless(autoplay: bool) -> Self {
        Self {
            autoplay: u8::from(autoplay),
            controls: 0,
            disablekb: 1,
            fs: 0,
            modestbranding: 1,
            rel: 0,
            showinfo: 0,
        }
    }
}

/// Everything needed to construct a player instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub height: u32,
    pub width: u32,
    pub video_id: VideoId,
    pub player_vars: PlayerVars,
}

/// Playback state codes reported through `onStateChange`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmbedPlayerState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
}

impl EmbedPlayerState {
    /// Map a raw YouTube state code
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Unstarted),
            0 => Some(Self::Ended),
            1 => Some(Self::Playing),
            2 => Some(Self::Paused),
            3 => Some(Self::Buffering),
            5 => Some(Self::Cued),
            _ => None,
        }
    }
}

/// Callbacks delivered by the embed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmbedEvent {
    /// Bootstrap script finished loading; players may be constructed
    ApiReady,
    /// `onReady` of the current instance
    Ready,
    /// `onStateChange` of the current instance
    StateChange(EmbedPlayerState),
    /// `onError` of the current instance
    Error(i32),
}

/// Platform hook that bootstraps the embed API and builds players
pub trait EmbedHost {
    /// Inject the bootstrap script
    ///
    /// Returns immediately. Availability is signalled later by delivering
    /// [`EmbedEvent::ApiReady`] to the adapter.
    fn load_api(&mut self);

    /// Construct a player bound to the hidden container
    fn create_player(&mut self, config: &PlayerConfig) -> Result<Box<dyn EmbedPlayer>>;
}

/// Instance methods of one embedded player
pub trait EmbedPlayer {
    /// Replace the media and start buffering it
    fn load_video_by_id(&mut self, id: &VideoId);

    fn play_video(&mut self);

    fn pause_video(&mut self);

    /// Seek to `seconds` from the start
    fn seek_to(&mut self, seconds: f64, allow_seek_ahead: bool);

    /// Set output volume (0-100)
    fn set_volume(&mut self, volume: u8);

    /// Current playback position in seconds
    fn current_time(&self) -> f64;

    /// Media duration in seconds (0 while unknown)
    fn duration(&self) -> f64;
}
