//! Integration tests for the player adapter
//!
//! Drives a `PlaybackStore` + `PlayerAdapter` pair against a recording fake
//! embed and checks the exact calls the embed receives.

mod common;

use common::{spotify_track, youtube_track, Call, FakeHost, Recorder};
use std::sync::Arc;
use vibe_core::Track;
use vibe_embed::{
    AdapterError, AdapterState, EmbedEvent, EmbedOptions, EmbedPlayerState, PlayerAdapter,
    PlayerConfig, PlayerVars, Progress,
};
use vibe_playback::PlaybackStore;

// ===== Test Helpers =====

fn setup() -> (PlaybackStore, PlayerAdapter, Recorder) {
    let recorder = Recorder::default();
    let adapter = PlayerAdapter::new(Box::new(FakeHost::new(&recorder)));
    (PlaybackStore::new(), adapter, recorder)
}

/// Store + adapter with an instance already playing `A` out of `[A, B, C]`
fn instantiated() -> (PlaybackStore, PlayerAdapter, Recorder) {
    let (mut store, mut adapter, recorder) = setup();
    let tracks: Vec<Arc<Track>> = ["A", "B", "C"].iter().map(|id| youtube_track(id)).collect();

    store.play_playlist(tracks, 0);
    adapter.sync(&mut store).unwrap();
    adapter
        .handle_embed_event(EmbedEvent::ApiReady, &mut store)
        .unwrap();
    recorder.take();

    (store, adapter, recorder)
}

fn ended() -> EmbedEvent {
    EmbedEvent::StateChange(EmbedPlayerState::Ended)
}

fn current_id(store: &PlaybackStore) -> &str {
    store.current_track().map(|t| t.id.as_str()).unwrap_or("")
}

// ===== Lifecycle =====

#[test]
fn test_first_track_bootstraps_api_then_creates_player() {
    let (mut store, mut adapter, recorder) = setup();
    assert_eq!(adapter.state(), AdapterState::Uninitialized);

    store.set_current_track(youtube_track("abc123"));
    adapter.sync(&mut store).unwrap();

    assert_eq!(adapter.state(), AdapterState::ApiLoading);
    assert_eq!(recorder.calls(), vec![Call::LoadApi]);
    assert!(!adapter.is_instantiated());
    assert_eq!(adapter.pending_video().map(|v| v.as_str()), Some("abc123"));

    adapter
        .handle_embed_event(EmbedEvent::ApiReady, &mut store)
        .unwrap();

    assert_eq!(adapter.state(), AdapterState::Instantiated);
    assert!(adapter.is_track_loaded());
    assert_eq!(adapter.loaded_video().map(|v| v.as_str()), Some("abc123"));
    assert!(adapter.pending_video().is_none());
    assert_eq!(
        recorder.calls(),
        vec![
            Call::LoadApi,
            Call::Create(PlayerConfig {
                height: 0,
                width: 0,
                video_id: vibe_embed::extract_video_id("https://youtu.be/abc123").unwrap(),
                player_vars: PlayerVars::headless(true),
            }),
        ]
    );
}

#[test]
fn test_stale_api_ready_is_ignored() {
    let (mut store, mut adapter, recorder) = setup();

    adapter
        .handle_embed_event(EmbedEvent::ApiReady, &mut store)
        .unwrap();
    assert_eq!(adapter.state(), AdapterState::Uninitialized);
    assert!(recorder.calls().is_empty());

    let (mut store, mut adapter, recorder) = instantiated();
    adapter
        .handle_embed_event(EmbedEvent::ApiReady, &mut store)
        .unwrap();
    assert_eq!(adapter.state(), AdapterState::Instantiated);
    assert!(recorder.calls().is_empty(), "no second instance");
}

#[test]
fn test_latest_request_wins_while_api_loading() {
    let (mut store, mut adapter, recorder) = setup();

    store.set_current_track(youtube_track("first"));
    adapter.sync(&mut store).unwrap();
    store.set_current_track(youtube_track("second"));
    store.toggle_play_pause();
    adapter.sync(&mut store).unwrap();

    adapter
        .handle_embed_event(EmbedEvent::ApiReady, &mut store)
        .unwrap();

    let calls = recorder.calls();
    assert_eq!(calls.len(), 2, "API must be injected once: {:?}", calls);
    match &calls[1] {
        Call::Create(config) => {
            assert_eq!(config.video_id.as_str(), "second");
            assert_eq!(config.player_vars.autoplay, 0, "autoplay follows the paused intent");
        }
        other => panic!("expected player creation, got {:?}", other),
    }
}

#[test]
fn test_options_size_the_player() {
    let recorder = Recorder::default();
    let mut adapter = PlayerAdapter::new(Box::new(FakeHost::new(&recorder))).with_options(
        EmbedOptions {
            width: 320,
            height: 180,
        },
    );
    let mut store = PlaybackStore::new();

    store.set_current_track(youtube_track("A"));
    adapter.sync(&mut store).unwrap();
    adapter
        .handle_embed_event(EmbedEvent::ApiReady, &mut store)
        .unwrap();

    assert!(matches!(
        &recorder.calls()[1],
        Call::Create(PlayerConfig { width: 320, height: 180, .. })
    ));
}

#[test]
fn test_creation_failure_returns_to_ready_and_retries() {
    let (mut store, mut adapter, recorder) = setup();
    recorder.fail_create(true);

    store.set_current_track(youtube_track("A"));
    adapter.sync(&mut store).unwrap();
    let err = adapter
        .handle_embed_event(EmbedEvent::ApiReady, &mut store)
        .unwrap_err();

    assert!(matches!(err, AdapterError::Embed(_)));
    assert_eq!(adapter.state(), AdapterState::Ready);
    assert_eq!(adapter.drain_notices().len(), 1);

    recorder.fail_create(false);
    store.set_current_track(youtube_track("B"));
    adapter.sync(&mut store).unwrap();

    assert_eq!(adapter.state(), AdapterState::Instantiated);
    assert_eq!(adapter.loaded_video().map(|v| v.as_str()), Some("B"));
}

// ===== Track Changes =====

#[test]
fn test_new_track_reuses_instance() {
    let (mut store, mut adapter, recorder) = instantiated();

    store.play_next_track();
    adapter.sync(&mut store).unwrap();

    assert_eq!(recorder.calls(), vec![Call::Load("B".to_string()), Call::Play]);
    assert_eq!(adapter.loaded_video().map(|v| v.as_str()), Some("B"));
}

#[test]
fn test_latest_playing_value_applied_after_load() {
    let (mut store, mut adapter, recorder) = instantiated();

    // Two changes in one tick: select a track, then pause
    store.play_next_track();
    store.toggle_play_pause();
    adapter.sync(&mut store).unwrap();

    assert_eq!(recorder.calls(), vec![Call::Load("B".to_string()), Call::Pause]);
}

#[test]
fn test_unsupported_source_is_rejected() {
    let (mut store, mut adapter, recorder) = setup();

    store.set_current_track(spotify_track("0VjIjW4GlUZAMYd2vXMi3b"));
    let err = adapter.sync(&mut store).unwrap_err();

    assert!(matches!(err, AdapterError::UnsupportedSource(_)));
    assert!(recorder.calls().is_empty(), "nothing may be loaded");
    assert_eq!(adapter.state(), AdapterState::Uninitialized);

    let notices = adapter.drain_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].message.contains("spotify"));
}

#[test]
fn test_malformed_url_is_rejected() {
    let (mut store, mut adapter, recorder) = instantiated();

    let broken = Arc::new(Track::new(
        "broken",
        "Broken",
        vibe_core::TrackSource::Youtube,
        "https://example.com/video",
    ));
    store.set_current_track(broken);
    let err = adapter.sync(&mut store).unwrap_err();

    assert_eq!(
        err,
        AdapterError::MalformedUrl("https://example.com/video".to_string())
    );
    assert_eq!(recorder.calls(), vec![Call::Pause], "old video must not keep playing");
    assert_eq!(adapter.loaded_video().map(|v| v.as_str()), Some("A"));
    assert_eq!(adapter.drain_notices().len(), 1);
}

#[test]
fn test_rejected_selection_discards_pending_video() {
    let (mut store, mut adapter, recorder) = setup();

    store.set_current_track(youtube_track("A"));
    adapter.sync(&mut store).unwrap();
    store.set_current_track(spotify_track("B"));
    assert!(matches!(
        adapter.sync(&mut store),
        Err(AdapterError::UnsupportedSource(_))
    ));
    assert!(adapter.pending_video().is_none());

    adapter
        .handle_embed_event(EmbedEvent::ApiReady, &mut store)
        .unwrap();

    assert_eq!(current_id(&store), "B");
    assert_eq!(adapter.state(), AdapterState::Ready);
    assert!(!adapter.is_instantiated());
    assert_eq!(recorder.calls(), vec![Call::LoadApi], "no player for a stale video");

    // The next playable selection creates the player with its own video
    store.set_current_track(youtube_track("C"));
    adapter.sync(&mut store).unwrap();
    assert_eq!(adapter.state(), AdapterState::Instantiated);
    assert!(matches!(
        &recorder.calls()[1],
        Call::Create(config) if config.video_id.as_str() == "C"
    ));
}

// ===== Play/Pause & Volume =====

#[test]
fn test_play_pause_forwarded_to_instance() {
    let (mut store, mut adapter, recorder) = instantiated();

    store.toggle_play_pause();
    adapter.sync(&mut store).unwrap();
    store.toggle_play_pause();
    adapter.sync(&mut store).unwrap();

    assert_eq!(recorder.calls(), vec![Call::Pause, Call::Play]);
}

#[test]
fn test_play_pause_without_instance_is_noop() {
    let (mut store, mut adapter, recorder) = setup();

    store.toggle_play_pause();
    adapter.sync(&mut store).unwrap();

    assert!(recorder.calls().is_empty());
    assert_eq!(adapter.state(), AdapterState::Uninitialized);
}

#[test]
fn test_volume_forwarded_only_with_instance() {
    let (mut store, mut adapter, recorder) = setup();

    adapter.set_volume(30);
    assert!(recorder.calls().is_empty());
    assert_eq!(adapter.volume().level(), 30);

    store.set_current_track(youtube_track("A"));
    adapter.sync(&mut store).unwrap();
    adapter
        .handle_embed_event(EmbedEvent::ApiReady, &mut store)
        .unwrap();
    recorder.take();

    // Ready applies the stored volume
    adapter
        .handle_embed_event(EmbedEvent::Ready, &mut store)
        .unwrap();
    assert_eq!(recorder.take(), vec![Call::Volume(30), Call::Play]);

    adapter.set_volume(120);
    adapter.toggle_mute();
    assert_eq!(recorder.take(), vec![Call::Volume(100), Call::Volume(0)]);
}

#[test]
fn test_seek_forwards_with_seek_ahead() {
    let (_store, mut adapter, recorder) = instantiated();

    adapter.seek(-3.0);
    adapter.seek(42.5);

    assert_eq!(
        recorder.calls(),
        vec![Call::Seek(0.0, true), Call::Seek(42.5, true)]
    );
    assert_eq!(adapter.progress().position, 42.5);
}

// ===== End Of Track =====

#[test]
fn test_ended_with_repeat_restarts_same_track() {
    let (mut store, mut adapter, recorder) = instantiated();
    adapter.set_repeat(true);

    adapter.handle_embed_event(ended(), &mut store).unwrap();
    adapter.sync(&mut store).unwrap();

    assert_eq!(current_id(&store), "A");
    assert_eq!(recorder.calls(), vec![Call::Seek(0.0, true), Call::Play]);
}

#[test]
fn test_ended_without_repeat_advances() {
    let (mut store, mut adapter, recorder) = instantiated();
    assert!(!adapter.repeat());

    adapter.handle_embed_event(ended(), &mut store).unwrap();
    assert_eq!(current_id(&store), "B");

    adapter.sync(&mut store).unwrap();
    assert_eq!(recorder.calls(), vec![Call::Load("B".to_string()), Call::Play]);
}

#[test]
fn test_ended_on_last_track_wraps() {
    let (mut store, mut adapter, _recorder) = instantiated();
    store.play_previous_track();
    adapter.sync(&mut store).unwrap();
    assert_eq!(current_id(&store), "C");

    adapter.handle_embed_event(ended(), &mut store).unwrap();
    assert_eq!(current_id(&store), "A");
}

#[test]
fn test_ended_before_instance_is_ignored() {
    let (mut store, mut adapter, _recorder) = setup();
    let tracks: Vec<Arc<Track>> = ["A", "B"].iter().map(|id| youtube_track(id)).collect();
    store.play_playlist(tracks, 0);
    store.drain_events();

    adapter.handle_embed_event(ended(), &mut store).unwrap();

    assert_eq!(current_id(&store), "A");
    assert!(!store.has_pending_events());
}

#[test]
fn test_other_state_changes_are_recorded_only() {
    let (mut store, mut adapter, recorder) = instantiated();

    adapter
        .handle_embed_event(EmbedEvent::StateChange(EmbedPlayerState::Buffering), &mut store)
        .unwrap();

    assert_eq!(adapter.player_state(), Some(EmbedPlayerState::Buffering));
    assert!(recorder.calls().is_empty());
    assert_eq!(current_id(&store), "A");
}

// ===== Errors =====

#[test]
fn test_embed_error_reports_without_skipping() {
    let (mut store, mut adapter, recorder) = instantiated();

    let err = adapter
        .handle_embed_event(EmbedEvent::Error(150), &mut store)
        .unwrap_err();

    assert_eq!(err, AdapterError::ExternalPlayer { code: 150 });
    assert_eq!(current_id(&store), "A");
    assert!(store.is_playing());
    assert!(recorder.calls().is_empty());
    assert_eq!(adapter.state(), AdapterState::Instantiated);

    let notices = adapter.drain_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].message.contains("150"));
}

// ===== Polling =====

#[test]
fn test_poll_position_requires_loaded_track() {
    let (mut store, mut adapter, recorder) = setup();
    assert!(adapter.poll_position().is_none());

    store.set_current_track(youtube_track("A"));
    adapter.sync(&mut store).unwrap();
    assert!(adapter.poll_position().is_none(), "still waiting for the API");

    adapter
        .handle_embed_event(EmbedEvent::ApiReady, &mut store)
        .unwrap();
    recorder.set_time(30.0);
    recorder.set_duration(120.0);

    let progress = adapter.poll_position().unwrap();
    assert_eq!(
        progress,
        Progress {
            position: 30.0,
            duration: 120.0
        }
    );
    assert_eq!(progress.fraction(), 0.25);
    assert_eq!(Progress::default().fraction(), 0.0);
}
