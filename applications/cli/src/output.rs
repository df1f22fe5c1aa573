/// Terminal rendering of session updates
use vibe_embed::{Progress, SessionUpdate};

/// Format seconds as `m:ss`
pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

fn progress_line(progress: &Progress) -> String {
    format!(
        "  {} / {} ({:.0}%)",
        format_time(progress.position),
        format_time(progress.duration),
        progress.fraction() * 100.0
    )
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

/// Line to print for an update
pub fn describe(update: &SessionUpdate) -> String {
    match update {
        SessionUpdate::NowPlaying(track) => format!(
            "Now playing: {} - {} [{}]",
            track.title,
            track.artist_or_dash(),
            track.source.display_name()
        ),
        SessionUpdate::PlayingChanged(true) => "Playing".to_string(),
        SessionUpdate::PlayingChanged(false) => "Paused".to_string(),
        SessionUpdate::ShuffleChanged(enabled) => format!("Shuffle {}", on_off(*enabled)),
        SessionUpdate::RepeatChanged(enabled) => format!("Repeat {}", on_off(*enabled)),
        SessionUpdate::QueueChanged(length) => format!("Queue: {} track(s)", length),
        SessionUpdate::Progress(progress) => progress_line(progress),
        SessionUpdate::Notice(notice) => format!("! {}", notice.message),
    }
}
