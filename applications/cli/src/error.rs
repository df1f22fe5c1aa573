/// CLI error types
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Playlist {0:?} has no tracks")]
    EmptyPlaylist(PathBuf),

    #[error("Playlist error: {0}")]
    Playlist(#[from] vibe_core::CoreError),

    #[error("Link error: {0}")]
    Link(#[from] vibe_embed::AdapterError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Problems with a line typed at the transport prompt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid {name}: {value}")]
    InvalidArgument { name: &'static str, value: String },

    #[error("No track at index {index} (playlist has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
