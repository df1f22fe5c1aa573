/// Vibe Mixer - headless playlist player
use clap::{Parser, Subcommand};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vibe_cli::{
    commands::{parse_command, HELP},
    output::describe,
    playlist::{inspect_link, load_playlist},
    simulated::SimulatedHost,
    PlayerSettings,
};
use vibe_core::Track;
use vibe_embed::{
    extract_video_id, Command, EmbedOptions, PlayerAdapter, PlayerSession, SessionHandle,
    SessionUpdate,
};

#[derive(Parser)]
#[command(name = "vibe")]
#[command(about = "Vibe Mixer headless playlist player", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./vibe.toml when present)
    #[arg(short, long, global = true, env = "VIBE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a playlist file, reading transport commands from stdin
    Play {
        /// JSON array of playlist track records
        playlist: PathBuf,
        /// Index of the first track to play
        #[arg(short, long, default_value_t = 0)]
        start: usize,
        /// Start with shuffle enabled
        #[arg(long)]
        shuffle: bool,
        /// Loop the current track
        #[arg(long)]
        repeat: bool,
    },
    /// Print the YouTube video id of a link
    VideoId {
        /// YouTube watch or short link
        url: String,
    },
    /// Describe a pasted link as JSON
    Inspect {
        /// Track link
        url: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (stderr; stdout is for player output)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vibe_cli=info,vibe_embed=info,vibe_playback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            playlist,
            start,
            shuffle,
            repeat,
        } => {
            play(cli.config.as_deref(), &playlist, start, shuffle, repeat).await?;
        }
        Commands::VideoId { url } => {
            let id = extract_video_id(&url)?;
            println!("{}", id);
        }
        Commands::Inspect { url } => {
            let info = inspect_link(&url)?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}

async fn play(
    config: Option<&Path>,
    playlist: &Path,
    start: usize,
    shuffle: bool,
    repeat: bool,
) -> anyhow::Result<()> {
    let settings = PlayerSettings::load(config)?;
    settings.validate()?;

    let tracks = load_playlist(playlist)?;
    info!(path = ?playlist, tracks = tracks.len(), "Playlist loaded");

    let (handle, inputs) = SessionHandle::channel();
    let host = SimulatedHost::new(handle.clone(), settings.simulation.track_duration());
    let adapter = PlayerAdapter::new(Box::new(host))
        .with_options(EmbedOptions {
            width: settings.embed.width,
            height: settings.embed.height,
        })
        .with_volume(settings.player.volume)
        .with_repeat(repeat || settings.player.repeat);

    let (session, updates) = PlayerSession::new(adapter, inputs);
    let session = session.with_poll_interval(settings.player.poll_interval());

    // Shuffle first so the playlist is shuffled as it is loaded
    if shuffle || settings.player.shuffle {
        handle.command(Command::ToggleShuffle);
    }
    handle.command(Command::PlayPlaylist {
        tracks: tracks.clone(),
        start,
    });

    let printer = tokio::spawn(print_updates(updates));
    spawn_stdin_reader(handle, tracks);

    eprintln!("{}", HELP);
    let (store, _adapter) = session.run().await;
    printer.await?;

    if let Some(track) = store.current_track() {
        info!(track_id = %track.id, "Stopped");
    }
    Ok(())
}

async fn print_updates(mut updates: UnboundedReceiver<SessionUpdate>) {
    while let Some(update) = updates.recv().await {
        println!("{}", describe(&update));
    }
}

/// Read commands on a plain thread; blocking stdin must not hold up runtime shutdown
fn spawn_stdin_reader(handle: SessionHandle, playlist: Vec<Arc<Track>>) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };

            match parse_command(&line, &playlist) {
                Ok(Some(command)) => {
                    if !handle.command(command) {
                        return;
                    }
                }
                Ok(None) => {}
                Err(err) => warn!(error = %err, "Ignoring input"),
            }
        }

        // End of input stops playback
        handle.command(Command::Shutdown);
    });
}
