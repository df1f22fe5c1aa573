//! Adapter state machine
//!
//! Pure `(state, input) -> (action, next state)` table. The adapter
//! executes the action against the embed; nothing here performs I/O.
//!
//! ```text
//! Uninitialized --LoadRequested--> ApiLoading --ApiReady(pending)--> Instantiated
//!                                      |
//!                                      +--ApiReady(nothing pending)--> Ready --LoadRequested--> Instantiated
//! ```

use serde::{Deserialize, Serialize};

/// Lifecycle of the embed integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AdapterState {
    /// Bootstrap script not requested yet
    #[default]
    Uninitialized,
    /// Bootstrap script injected, waiting for the platform signal
    ApiLoading,
    /// API available, no player constructed
    Ready,
    /// One player instance exists
    Instantiated,
}

/// Inputs driving the adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterInput {
    /// A playable track was selected
    LoadRequested,
    /// Bootstrap finished
    ApiReady {
        /// Whether a load request arrived while the API was loading
        pending: bool,
    },
    /// Play/pause intent changed
    PlayingChanged,
    /// Volume or mute changed
    VolumeChanged,
    /// Current media reached its end
    Ended {
        /// Loop the current track
        repeat: bool,
    },
    /// Embed signalled a playback error
    EmbedError,
}

/// Effect the adapter must carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterAction {
    /// Nothing to do
    None,
    /// Inject the bootstrap script and remember the requested video
    InjectApi,
    /// Replace the video remembered for instantiation
    ReplacePending,
    /// Construct the player with the requested (or pending) video
    CreatePlayer,
    /// Load the video into the existing instance, then apply play/pause
    LoadVideo,
    /// Forward play/pause to the instance
    ForwardPlayback,
    /// Forward volume to the instance
    ForwardVolume,
    /// Seek to the start and resume
    RestartTrack,
    /// Ask the store for the next track
    AdvanceTrack,
    /// Surface the embed error to the user
    ReportError,
}

/// Outcome of one table lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub action: AdapterAction,
    pub next: AdapterState,
}

impl Transition {
    const fn to(action: AdapterAction, next: AdapterState) -> Self {
        Self { action, next }
    }

    const fn stay(state: AdapterState) -> Self {
        Self::to(AdapterAction::None, state)
    }
}

/// Look up the transition for `input` in `state`
pub fn transition(state: AdapterState, input: AdapterInput) -> Transition {
    use AdapterAction as A;
    use AdapterInput as I;
    use AdapterState as S;

    match (state, input) {
        (_, I::EmbedError) => Transition::to(A::ReportError, state),

        (S::Uninitialized, I::LoadRequested) => Transition::to(A::InjectApi, S::ApiLoading),
        (S::ApiLoading, I::LoadRequested) => Transition::to(A::ReplacePending, S::ApiLoading),
        (S::ApiLoading, I::ApiReady { pending: true }) => {
            Transition::to(A::CreatePlayer, S::Instantiated)
        }
        (S::ApiLoading, I::ApiReady { pending: false }) => Transition::stay(S::Ready),
        (S::Ready, I::LoadRequested) => Transition::to(A::CreatePlayer, S::Instantiated),

        (S::Instantiated, I::LoadRequested) => Transition::to(A::LoadVideo, S::Instantiated),
        (S::Instantiated, I::PlayingChanged) => {
            Transition::to(A::ForwardPlayback, S::Instantiated)
        }
        (S::Instantiated, I::VolumeChanged) => Transition::to(A::ForwardVolume, S::Instantiated),
        (S::Instantiated, I::Ended { repeat: true }) => {
            Transition::to(A::RestartTrack, S::Instantiated)
        }
        (S::Instantiated, I::Ended { repeat: false }) => {
            Transition::to(A::AdvanceTrack, S::Instantiated)
        }

        // No instance to drive yet, or a stale API signal
        (_, I::PlayingChanged | I::VolumeChanged | I::Ended { .. } | I::ApiReady { .. }) => {
            Transition::stay(state)
        }
    }
}
