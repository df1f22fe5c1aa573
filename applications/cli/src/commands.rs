/// Transport commands typed on stdin
use crate::error::CommandError;
use std::sync::Arc;
use vibe_core::Track;
use vibe_embed::Command;

/// Help text listing the prompt commands
pub const HELP: &str = "\
Commands:
  next | n            skip to the next track
  prev | p            go back to the previous track
  pause | play        toggle play/pause
  shuffle             toggle shuffle
  repeat              toggle repeat
  mute                toggle mute
  vol <0-100>         set volume
  seek <seconds>      seek within the current track
  queue <index>       queue a playlist track (0-based)
  clear-queue         empty the queue
  quit | q            stop playback and exit";

/// Parse one input line
///
/// Blank lines give `Ok(None)`. `queue <index>` looks the track up in `playlist`.
pub fn parse_command(
    line: &str,
    playlist: &[Arc<Track>],
) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let argument = words.next();

    let command = match name.to_ascii_lowercase().as_str() {
        "next" | "n" => Command::Next,
        "prev" | "previous" | "p" => Command::Previous,
        "pause" | "play" => Command::TogglePlayPause,
        "shuffle" => Command::ToggleShuffle,
        "repeat" => Command::ToggleRepeat,
        "mute" => Command::ToggleMute,
        "vol" | "volume" => {
            let value = argument.ok_or(CommandError::MissingArgument("volume"))?;
            let level = value
                .parse::<u8>()
                .ok()
                .filter(|level| *level <= 100)
                .ok_or_else(|| CommandError::InvalidArgument {
                    name: "volume",
                    value: value.to_string(),
                })?;
            Command::SetVolume(level)
        }
        "seek" => {
            let value = argument.ok_or(CommandError::MissingArgument("seconds"))?;
            let seconds = value
                .parse::<f64>()
                .ok()
                .filter(|s| s.is_finite() && *s >= 0.0)
                .ok_or_else(|| CommandError::InvalidArgument {
                    name: "seconds",
                    value: value.to_string(),
                })?;
            Command::Seek(seconds)
        }
        "queue" => {
            let value = argument.ok_or(CommandError::MissingArgument("index"))?;
            let index = value
                .parse::<usize>()
                .map_err(|_| CommandError::InvalidArgument {
                    name: "index",
                    value: value.to_string(),
                })?;
            let track = playlist
                .get(index)
                .ok_or(CommandError::IndexOutOfRange {
                    index,
                    len: playlist.len(),
                })?;
            Command::AddToQueue(Arc::clone(track))
        }
        "clear-queue" => Command::ClearQueue,
        "quit" | "exit" | "q" => Command::Shutdown,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}
