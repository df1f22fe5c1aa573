//! Player adapter - bridges the playback store and one embedded player
//!
//! Translates store changes (track, play/pause) and transport requests
//! (seek, volume) into calls on the embed, and embed callbacks (ready,
//! ended, error) back into store transitions.

use crate::{
    embed::{EmbedEvent, EmbedHost, EmbedPlayer, EmbedPlayerState, PlayerConfig, PlayerVars},
    error::{AdapterError, Result},
    machine::{transition, AdapterAction, AdapterInput, AdapterState, Transition},
    volume::Volume,
    youtube::{extract_video_id, VideoId},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use vibe_core::{Track, TrackSource};
use vibe_playback::{PlaybackEvent, PlaybackStore};

/// Size of the (hidden) player container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmbedOptions {
    pub width: u32,
    pub height: u32,
}

/// Playback position sampled from the instance
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Progress {
    /// Seconds from the start
    pub position: f64,
    /// Media length in seconds (0 while unknown)
    pub duration: f64,
}

impl Progress {
    /// Fraction played in `[0, 1]`
    pub fn fraction(&self) -> f64 {
        if self.duration > 0.0 {
            (self.position / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// User-facing message produced by the adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNotice {
    pub message: String,
}

/// Adapter owning the single external player instance
///
/// Nothing else may call into the instance. Store changes reach the
/// adapter through [`sync`](Self::sync) (or [`apply`](Self::apply)), and
/// embed callbacks through [`handle_embed_event`](Self::handle_embed_event).
pub struct PlayerAdapter {
    host: Box<dyn EmbedHost>,
    options: EmbedOptions,
    state: AdapterState,
    player: Option<Box<dyn EmbedPlayer>>,

    // Video requested before an instance could be created
    pending: Option<VideoId>,
    // Video currently in the instance
    loaded: Option<VideoId>,

    // Latest play/pause intent seen in the store
    is_playing: bool,
    repeat: bool,
    volume: Volume,

    progress: Progress,
    player_state: Option<EmbedPlayerState>,
    notices: Vec<PlayerNotice>,
}

impl PlayerAdapter {
    /// Create an adapter; the embed API is bootstrapped on the first load
    pub fn new(host: Box<dyn EmbedHost>) -> Self {
        Self {
            host,
            options: EmbedOptions::default(),
            state: AdapterState::Uninitialized,
            player: None,
            pending: None,
            loaded: None,
            is_playing: false,
            repeat: false,
            volume: Volume::default(),
            progress: Progress::default(),
            player_state: None,
            notices: Vec::new(),
        }
    }

    /// Set the container size used when constructing the player
    pub fn with_options(mut self, options: EmbedOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the initial volume
    pub fn with_volume(mut self, level: u8) -> Self {
        self.volume.set_level(level);
        self
    }

    /// Set the initial repeat flag
    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    // ===== Store Synchronization =====

    /// Drain the store's events and apply them to the player
    pub fn sync(&mut self, store: &mut PlaybackStore) -> Result<()> {
        let events = store.drain_events();
        self.apply(&events, store)
    }

    /// Apply already-drained store events
    ///
    /// Only the latest store values are applied, however many changes the
    /// events describe.
    pub fn apply(&mut self, events: &[PlaybackEvent], store: &PlaybackStore) -> Result<()> {
        if events.is_empty() {
            return Ok(());
        }

        self.is_playing = store.is_playing();

        if events.iter().any(PlaybackEvent::is_track_change) {
            if let Some(track) = store.current_track() {
                return self.load_track(track);
            }
        }

        if events
            .iter()
            .any(|e| matches!(e, PlaybackEvent::PlayingChanged { .. }))
        {
            self.step(AdapterInput::PlayingChanged, None)?;
        }

        Ok(())
    }

    fn load_track(&mut self, track: &Track) -> Result<()> {
        let video = match playable_video(track) {
            Ok(video) => video,
            Err(err) => {
                self.reject_selection();
                return Err(self.report(err));
            }
        };

        info!(track_id = %track.id, video = %video, "Loading track");
        self.progress = Progress::default();
        self.step(AdapterInput::LoadRequested, Some(video))?;
        Ok(())
    }

    // ===== Embed Callbacks =====

    /// Handle a callback from the embed
    ///
    /// End-of-track may move the store to the next track; call
    /// [`sync`](Self::sync) afterwards to load it.
    pub fn handle_embed_event(&mut self, event: EmbedEvent, store: &mut PlaybackStore) -> Result<()> {
        self.is_playing = store.is_playing();

        match event {
            EmbedEvent::ApiReady => {
                info!("Embed API ready");
                let pending = self.pending.is_some();
                self.step(AdapterInput::ApiReady { pending }, None)?;
            }
            EmbedEvent::Ready => {
                debug!("Player ready");
                if let Some(player) = self.player.as_mut() {
                    player.set_volume(self.volume.effective());
                    if self.is_playing {
                        player.play_video();
                    }
                }
            }
            EmbedEvent::StateChange(player_state) => {
                self.player_state = Some(player_state);

                if player_state == EmbedPlayerState::Ended {
                    let input = AdapterInput::Ended {
                        repeat: self.repeat,
                    };
                    if self.step(input, None)? == AdapterAction::AdvanceTrack {
                        info!("Track ended, advancing");
                        store.play_next_track();
                    }
                }
            }
            EmbedEvent::Error(code) => {
                self.step(AdapterInput::EmbedError, None)?;
                return Err(self.report(AdapterError::ExternalPlayer { code }));
            }
        }

        Ok(())
    }

    // ===== Transport =====

    /// Seek within the loaded media; no-op without an instance
    pub fn seek(&mut self, seconds: f64) {
        let seconds = seconds.max(0.0);
        if let Some(player) = self.player.as_mut() {
            player.seek_to(seconds, true);
            self.progress.position = seconds;
        }
    }

    /// Set volume (0-100); forwarded only if an instance exists
    pub fn set_volume(&mut self, level: u8) {
        self.volume.set_level(level);
        self.forward(AdapterInput::VolumeChanged);
    }

    /// Toggle mute; forwarded only if an instance exists
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.forward(AdapterInput::VolumeChanged);
    }

    /// Loop the current track on end
    pub fn set_repeat(&mut self, repeat: bool) {
        self.repeat = repeat;
    }

    /// Flip the repeat flag, returning the new value
    pub fn toggle_repeat(&mut self) -> bool {
        self.repeat = !self.repeat;
        self.repeat
    }

    /// Sample position and duration from the instance
    ///
    /// Returns `None` while no track is loaded.
    pub fn poll_position(&mut self) -> Option<Progress> {
        let player = self.player.as_ref().filter(|_| self.loaded.is_some())?;
        self.progress = Progress {
            position: player.current_time(),
            duration: player.duration(),
        };
        Some(self.progress)
    }

    // ===== State Queries =====

    pub fn state(&self) -> AdapterState {
        self.state
    }

    pub fn is_instantiated(&self) -> bool {
        self.player.is_some()
    }

    /// Whether a track is loaded into an instance (polling is active)
    pub fn is_track_loaded(&self) -> bool {
        self.player.is_some() && self.loaded.is_some()
    }

    pub fn loaded_video(&self) -> Option<&VideoId> {
        self.loaded.as_ref()
    }

    pub fn pending_video(&self) -> Option<&VideoId> {
        self.pending.as_ref()
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn repeat(&self) -> bool {
        self.repeat
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Last state reported by the embed
    pub fn player_state(&self) -> Option<EmbedPlayerState> {
        self.player_state
    }

    /// Drain user-facing notices
    pub fn drain_notices(&mut self) -> Vec<PlayerNotice> {
        std::mem::take(&mut self.notices)
    }

    // ===== Internals =====

    /// Run one table transition and execute its action
    ///
    /// `AdvanceTrack` and `ReportError` are returned for the caller to
    /// carry out, since they need the store or the error details.
    fn step(&mut self, input: AdapterInput, video: Option<VideoId>) -> Result<AdapterAction> {
        let Transition { action, next } = transition(self.state, input);
        debug!(state = ?self.state, ?input, ?action, ?next, "Adapter transition");

        match action {
            AdapterAction::None | AdapterAction::AdvanceTrack | AdapterAction::ReportError => {}
            AdapterAction::InjectApi => {
                self.pending = video;
                self.host.load_api();
            }
            AdapterAction::ReplacePending => {
                self.pending = video;
            }
            AdapterAction::CreatePlayer => {
                let Some(video) = video.or_else(|| self.pending.take()) else {
                    self.state = AdapterState::Ready;
                    return Ok(AdapterAction::None);
                };
                self.pending = None;

                if let Err(err) = self.create_player(video) {
                    self.state = AdapterState::Ready;
                    return Err(self.report(err));
                }
            }
            AdapterAction::LoadVideo => {
                if let (Some(player), Some(video)) = (self.player.as_mut(), video) {
                    player.load_video_by_id(&video);
                    self.loaded = Some(video);
                }
                self.forward_playback();
            }
            AdapterAction::ForwardPlayback => self.forward_playback(),
            AdapterAction::ForwardVolume => {
                if let Some(player) = self.player.as_mut() {
                    player.set_volume(self.volume.effective());
                }
            }
            AdapterAction::RestartTrack => {
                if let Some(player) = self.player.as_mut() {
                    player.seek_to(0.0, true);
                    player.play_video();
                }
                self.progress.position = 0.0;
            }
        }

        self.state = next;
        Ok(action)
    }

    /// Step for inputs whose actions cannot fail
    fn forward(&mut self, input: AdapterInput) {
        if let Err(err) = self.step(input, None) {
            debug!(error = %err, "Forwarding failed");
        }
    }

    fn create_player(&mut self, video: VideoId) -> Result<()> {
        let config = PlayerConfig {
            height: self.options.height,
            width: self.options.width,
            video_id: video.clone(),
            player_vars: PlayerVars::headless(self.is_playing),
        };

        let player = self.host.create_player(&config)?;
        info!(video = %video, autoplay = self.is_playing, "Player instance created");

        self.player = Some(player);
        self.loaded = Some(video);
        Ok(())
    }

    fn forward_playback(&mut self) {
        if let Some(player) = self.player.as_mut() {
            if self.is_playing {
                player.play_video();
            } else {
                player.pause_video();
            }
        }
    }

    /// Forget a video waiting for the API and silence the instance
    ///
    /// The rejected track is current in the store, so nothing older may
    /// start or keep playing.
    fn reject_selection(&mut self) {
        if let Some(video) = self.pending.take() {
            debug!(video = %video, "Pending video discarded");
        }
        if let Some(player) = self.player.as_mut() {
            player.pause_video();
        }
    }

    /// Log and surface an error, handing it back for propagation
    fn report(&mut self, err: AdapterError) -> AdapterError {
        warn!(error = %err, "Playback error");
        self.notices.push(PlayerNotice {
            message: err.to_string(),
        });
        err
    }
}

/// Video id of an embeddable track
fn playable_video(track: &Track) -> Result<VideoId> {
    if track.source != TrackSource::Youtube {
        return Err(AdapterError::UnsupportedSource(track.source));
    }
    extract_video_id(&track.url)
}
