//! Shared test infrastructure: a recording fake embed

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use vibe_core::{Track, TrackSource};
use vibe_embed::{
    AdapterError, EmbedEvent, EmbedHost, EmbedPlayer, PlayerConfig, SessionHandle, VideoId,
};

/// Calls made on the fake embed, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    LoadApi,
    Create(PlayerConfig),
    Load(String),
    Play,
    Pause,
    Seek(f64, bool),
    Volume(u8),
}

/// Shared view into what the fake embed saw
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<Call>>>,
    time: Rc<Cell<f64>>,
    duration: Rc<Cell<f64>>,
    fail_create: Rc<Cell<bool>>,
}

impl Recorder {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Return and forget the calls recorded so far
    pub fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    pub fn set_time(&self, seconds: f64) {
        self.time.set(seconds);
    }

    pub fn set_duration(&self, seconds: f64) {
        self.duration.set(seconds);
    }

    pub fn fail_create(&self, fail: bool) {
        self.fail_create.set(fail);
    }

    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

/// Fake host; optionally signals API readiness through a session handle
pub struct FakeHost {
    recorder: Recorder,
    session: Option<SessionHandle>,
}

impl FakeHost {
    pub fn new(recorder: &Recorder) -> Self {
        Self {
            recorder: recorder.clone(),
            session: None,
        }
    }

    /// Signal `ApiReady` through the session as soon as the API is requested
    pub fn with_session(mut self, handle: SessionHandle) -> Self {
        self.session = Some(handle);
        self
    }
}

impl EmbedHost for FakeHost {
    fn load_api(&mut self) {
        self.recorder.push(Call::LoadApi);
        if let Some(session) = &self.session {
            session.embed_event(EmbedEvent::ApiReady);
        }
    }

    fn create_player(&mut self, config: &PlayerConfig) -> vibe_embed::Result<Box<dyn EmbedPlayer>> {
        if self.recorder.fail_create.get() {
            return Err(AdapterError::Embed("container missing".to_string()));
        }

        self.recorder.push(Call::Create(config.clone()));
        if let Some(session) = &self.session {
            session.embed_event(EmbedEvent::Ready);
        }
        Ok(Box::new(FakePlayer {
            recorder: self.recorder.clone(),
        }))
    }
}

struct FakePlayer {
    recorder: Recorder,
}

impl EmbedPlayer for FakePlayer {
    fn load_video_by_id(&mut self, id: &VideoId) {
        self.recorder.push(Call::Load(id.to_string()));
    }

    fn play_video(&mut self) {
        self.recorder.push(Call::Play);
    }

    fn pause_video(&mut self) {
        self.recorder.push(Call::Pause);
    }

    fn seek_to(&mut self, seconds: f64, allow_seek_ahead: bool) {
        self.recorder.push(Call::Seek(seconds, allow_seek_ahead));
    }

    fn set_volume(&mut self, volume: u8) {
        self.recorder.push(Call::Volume(volume));
    }

    fn current_time(&self) -> f64 {
        self.recorder.time.get()
    }

    fn duration(&self) -> f64 {
        self.recorder.duration.get()
    }
}

/// YouTube track whose video id equals its track id
pub fn youtube_track(id: &str) -> Arc<Track> {
    Arc::new(Track::new(
        id,
        format!("Track {}", id),
        TrackSource::Youtube,
        format!("https://www.youtube.com/watch?v={}&list=mix", id),
    ))
}

pub fn spotify_track(id: &str) -> Arc<Track> {
    Arc::new(Track::new(
        id,
        format!("Track {}", id),
        TrackSource::Spotify,
        format!("https://open.spotify.com/track/{}", id),
    ))
}
