//! Playback session - the single-threaded event loop
//!
//! Owns the playback store and the adapter. UI intents and embed callbacks
//! arrive over one channel and are handled strictly in order; a poll timer
//! samples the playback position while a track is loaded. Dropping every
//! [`SessionHandle`] (or sending [`Command::Shutdown`]) ends the loop and
//! releases the timer.

use crate::adapter::{PlayerAdapter, PlayerNotice, Progress};
use crate::embed::EmbedEvent;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};
use vibe_core::Track;
use vibe_playback::{PlaybackEvent, PlaybackStore};

/// Default position polling interval
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Transport intents coming from the UI
#[derive(Debug, Clone)]
pub enum Command {
    /// Load a playlist and start at the given index
    PlayPlaylist {
        tracks: Vec<Arc<Track>>,
        start: usize,
    },
    /// Play a single track (playlist untouched)
    PlayTrack(Arc<Track>),
    Next,
    Previous,
    TogglePlayPause,
    ToggleShuffle,
    ToggleRepeat,
    ToggleMute,
    SetVolume(u8),
    /// Seek to seconds from the start
    Seek(f64),
    AddToQueue(Arc<Track>),
    ClearQueue,
    Shutdown,
}

/// Everything the session loop reacts to
#[derive(Debug, Clone)]
pub enum SessionInput {
    Command(Command),
    Embed(EmbedEvent),
}

/// Updates published for the UI
#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
    /// A new track became current
    NowPlaying(Arc<Track>),
    PlayingChanged(bool),
    ShuffleChanged(bool),
    RepeatChanged(bool),
    QueueChanged(usize),
    Progress(Progress),
    Notice(PlayerNotice),
}

/// Cloneable sender side of a session
#[derive(Debug, Clone)]
pub struct SessionHandle {
    inputs: mpsc::UnboundedSender<SessionInput>,
}

impl SessionHandle {
    /// Create a handle and the input receiver to pass to [`PlayerSession::new`]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SessionInput>) {
        let (inputs, receiver) = mpsc::unbounded_channel();
        (Self { inputs }, receiver)
    }

    /// Send a UI intent; returns `false` once the session has ended
    pub fn command(&self, command: Command) -> bool {
        self.inputs.send(SessionInput::Command(command)).is_ok()
    }

    /// Deliver an embed callback; returns `false` once the session has ended
    pub fn embed_event(&self, event: EmbedEvent) -> bool {
        self.inputs.send(SessionInput::Embed(event)).is_ok()
    }
}

/// Event loop owning store and adapter
pub struct PlayerSession {
    store: PlaybackStore,
    adapter: PlayerAdapter,
    inputs: mpsc::UnboundedReceiver<SessionInput>,
    updates: mpsc::UnboundedSender<SessionUpdate>,
    poll_interval: Duration,
}

impl PlayerSession {
    /// Create a session and the receiver for its UI updates
    pub fn new(
        adapter: PlayerAdapter,
        inputs: mpsc::UnboundedReceiver<SessionInput>,
    ) -> (Self, mpsc::UnboundedReceiver<SessionUpdate>) {
        let (updates, receiver) = mpsc::unbounded_channel();
        let session = Self {
            store: PlaybackStore::new(),
            adapter,
            inputs,
            updates,
            poll_interval: DEFAULT_POLL_INTERVAL,
        };
        (session, receiver)
    }

    /// Override the position polling interval
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Run until shutdown, returning the final store and adapter
    pub async fn run(mut self) -> (PlaybackStore, PlayerAdapter) {
        info!(poll_ms = self.poll_interval.as_millis() as u64, "Playback session started");

        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            let polling = self.adapter.is_track_loaded();

            tokio::select! {
                input = self.inputs.recv() => match input {
                    None | Some(SessionInput::Command(Command::Shutdown)) => break,
                    Some(SessionInput::Command(command)) => self.handle_command(command),
                    Some(SessionInput::Embed(event)) => {
                        // Already surfaced as a notice by the adapter
                        if let Err(err) = self.adapter.handle_embed_event(event, &mut self.store) {
                            debug!(error = %err, ?event, "Embed event rejected");
                        }
                    }
                },
                _ = ticker.tick(), if polling => {
                    if let Some(progress) = self.adapter.poll_position() {
                        self.publish(SessionUpdate::Progress(progress));
                    }
                }
            }

            self.flush();
        }

        info!("Playback session stopped");
        (self.store, self.adapter)
    }

    fn handle_command(&mut self, command: Command) {
        debug!(?command, "Session command");

        match command {
            Command::PlayPlaylist { tracks, start } => self.store.play_playlist(tracks, start),
            Command::PlayTrack(track) => self.store.play_track(track),
            Command::Next => self.store.play_next_track(),
            Command::Previous => self.store.play_previous_track(),
            Command::TogglePlayPause => self.store.toggle_play_pause(),
            Command::ToggleShuffle => self.store.toggle_shuffle_mode(),
            Command::ToggleRepeat => {
                let repeat = self.adapter.toggle_repeat();
                self.publish(SessionUpdate::RepeatChanged(repeat));
            }
            Command::ToggleMute => self.adapter.toggle_mute(),
            Command::SetVolume(level) => self.adapter.set_volume(level),
            Command::Seek(seconds) => self.adapter.seek(seconds),
            Command::AddToQueue(track) => self.store.add_to_queue(track),
            Command::ClearQueue => self.store.clear_queue(),
            Command::Shutdown => {}
        }
    }

    /// Publish store changes and hand them to the adapter
    fn flush(&mut self) {
        let events = self.store.drain_events();

        for event in &events {
            let update = match event {
                PlaybackEvent::TrackChanged { .. } => {
                    self.store.current_track().cloned().map(SessionUpdate::NowPlaying)
                }
                PlaybackEvent::PlayingChanged { is_playing } => {
                    Some(SessionUpdate::PlayingChanged(*is_playing))
                }
                PlaybackEvent::ShuffleChanged { enabled } => {
                    Some(SessionUpdate::ShuffleChanged(*enabled))
                }
                PlaybackEvent::QueueChanged { length } => Some(SessionUpdate::QueueChanged(*length)),
                PlaybackEvent::PlaylistChanged { .. } => None,
            };
            if let Some(update) = update {
                self.publish(update);
            }
        }

        // Already surfaced as a notice by the adapter
        if let Err(err) = self.adapter.apply(&events, &self.store) {
            debug!(error = %err, "Store changes not applied");
        }

        for notice in self.adapter.drain_notices() {
            self.publish(SessionUpdate::Notice(notice));
        }
    }

    fn publish(&self, update: SessionUpdate) {
        // UI may have gone away; the session keeps running until shutdown
        let _ = self.updates.send(update);
    }
}
