use std::{path::PathBuf, sync::Arc};

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotex::{
    cli,
    config::{self, Config},
    error,
    pipeline::DEFAULT_BATCH_SIZE,
    spotify::client::MAX_PAGE_SIZE,
    types::PkceToken,
};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Load configuration from this .env file instead of the data directory
    #[clap(long, global = true)]
    env_file: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API and print the logged-in user
    Auth(AuthOptions),

    /// Download all tracks of the playlist as a JSON array
    DownloadTracks(DownloadTracksOptions),

    /// Fetch audio features for the playlist tracks and save them as CSV
    ExtractFeatures(ExtractFeaturesOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Run the browser flow even if a cached token exists
    #[clap(long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Playlist id, overrides SPOTIFY_PLAYLIST_ID
    #[clap(long)]
    pub playlist: Option<String>,

    /// Items requested per playlist page
    #[clap(long, default_value_t = MAX_PAGE_SIZE, value_parser = clap::value_parser!(u32).range(1..=MAX_PAGE_SIZE as i64))]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct DownloadTracksOptions {
    #[clap(flatten)]
    pub playlist: PlaylistOptions,

    /// Destination of the JSON array
    #[clap(long, short, default_value = "tracks.json")]
    pub output: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct ExtractFeaturesOptions {
    #[clap(flatten)]
    pub playlist: PlaylistOptions,

    /// Destination of the feature table
    #[clap(long, short, default_value = "features.csv")]
    pub output: PathBuf,

    /// Track ids per audio-features request (1 to 100)
    #[clap(
        long,
        default_value_t = DEFAULT_BATCH_SIZE as u64,
        value_parser = clap::value_parser!(u64).range(1..=DEFAULT_BATCH_SIZE as u64)
    )]
    pub batch_size: u64,

    /// Also save the raw playlist entries as JSON
    #[clap(long)]
    pub tracks_output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env(cli.env_file.clone()).await {
        error!("Cannot load environment. Err: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => error!("Invalid configuration. Err: {}", e),
    };

    match cli.command {
        Command::Auth(opt) => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(config, opt.force, oauth_result).await;
        }
        Command::DownloadTracks(opt) => {
            cli::download_tracks(
                &config,
                opt.playlist.playlist,
                &opt.output,
                opt.playlist.limit,
            )
            .await
        }
        Command::ExtractFeatures(opt) => {
            cli::extract_features(
                &config,
                opt.playlist.playlist,
                &opt.output,
                opt.playlist.limit,
                opt.batch_size as usize,
                opt.tracks_output,
            )
            .await
        }
        Command::Completions(_) => {}
    }
}
