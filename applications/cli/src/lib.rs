//! Vibe Mixer - Headless Player
//!
//! Library half of the `vibe` binary: configuration, playlist loading,
//! stdin command parsing, terminal output, and a simulated embed that lets
//! the playback session run without a browser.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod playlist;
pub mod simulated;

pub use config::PlayerSettings;
pub use error::{CliError, CommandError, Result};
