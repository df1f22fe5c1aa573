//! Simulated embed for headless playback
//!
//! Stands in for the browser widget: the API becomes ready immediately,
//! every video lasts a fixed time, and the end of a video is reported the
//! first time the position is sampled past it.

use std::cell::Cell;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};
use vibe_embed::{
    EmbedEvent, EmbedHost, EmbedPlayer, EmbedPlayerState, PlayerConfig, SessionHandle, VideoId,
};

/// Host that answers through the session channel
pub struct SimulatedHost {
    session: SessionHandle,
    track_length: Duration,
}

impl SimulatedHost {
    pub fn new(session: SessionHandle, track_length: Duration) -> Self {
        Self {
            session,
            track_length,
        }
    }
}

impl EmbedHost for SimulatedHost {
    fn load_api(&mut self) {
        debug!("Simulated embed API loading");
        self.session.embed_event(EmbedEvent::ApiReady);
    }

    fn create_player(&mut self, config: &PlayerConfig) -> vibe_embed::Result<Box<dyn EmbedPlayer>> {
        info!(
            video = %config.video_id,
            width = config.width,
            height = config.height,
            "Simulated player created"
        );

        let mut player = SimulatedPlayer {
            session: self.session.clone(),
            track_length: self.track_length.as_secs_f64(),
            video: config.video_id.clone(),
            offset: 0.0,
            started: None,
            volume: vibe_embed::DEFAULT_VOLUME,
            ended: Cell::new(false),
        };
        if config.player_vars.autoplay == 1 {
            player.started = Some(Instant::now());
        }

        self.session.embed_event(EmbedEvent::Ready);
        Ok(Box::new(player))
    }
}

/// One simulated video player
pub struct SimulatedPlayer {
    session: SessionHandle,
    track_length: f64,
    video: VideoId,

    // Seconds played before `started`
    offset: f64,
    // Set while playing
    started: Option<Instant>,
    volume: u8,

    // End already reported for this video
    ended: Cell<bool>,
}

impl SimulatedPlayer {
    fn position(&self) -> f64 {
        let running = self
            .started
            .map_or(0.0, |started| started.elapsed().as_secs_f64());
        (self.offset + running).min(self.track_length)
    }

    fn report(&self, state: EmbedPlayerState) {
        self.session.embed_event(EmbedEvent::StateChange(state));
    }
}

impl EmbedPlayer for SimulatedPlayer {
    fn load_video_by_id(&mut self, id: &VideoId) {
        debug!(video = %id, "Simulated load");
        self.video = id.clone();
        self.offset = 0.0;
        self.started = Some(Instant::now());
        self.ended.set(false);
    }

    fn play_video(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
            self.report(EmbedPlayerState::Playing);
        }
    }

    fn pause_video(&mut self) {
        if self.started.is_some() {
            self.offset = self.position();
            self.started = None;
            self.report(EmbedPlayerState::Paused);
        }
    }

    fn seek_to(&mut self, seconds: f64, _allow_seek_ahead: bool) {
        self.offset = seconds.clamp(0.0, self.track_length);
        if self.started.is_some() {
            self.started = Some(Instant::now());
        }
        self.ended.set(false);
    }

    fn set_volume(&mut self, volume: u8) {
        debug!(video = %self.video, from = self.volume, to = volume, "Simulated volume");
        self.volume = volume;
    }

    fn current_time(&self) -> f64 {
        let position = self.position();
        if position >= self.track_length && !self.ended.get() {
            self.ended.set(true);
            self.report(EmbedPlayerState::Ended);
        }
        position
    }

    fn duration(&self) -> f64 {
        self.track_length
    }
}
