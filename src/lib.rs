//! Spotify Playlist Export CLI Library
//!
//! This library provides functionality for exporting the tracks of a Spotify
//! playlist and the audio features of those tracks to flat files. It includes
//! modules for API communication, the paginated collection and batched
//! enrichment pipeline, CLI operations, configuration management and export
//! writers.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Token cache and export file writers
//! - `pipeline` - Paginated collector and batch feature enricher
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```no_run
//! use spotex::{config, pipeline, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> spotex::Res<()> {
//!     config::load_env(None).await?;
//!     let config = config::Config::from_env()?;
//!     let client = SpotifyClient::connect(&config).await?;
//!     let _tracks = pipeline::playlist_tracks(&client, "37i9dQZF1DXcBWIGoYBM5M", 100).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod pipeline;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Result type used by the API client and the pipeline.
///
/// The boxed error keeps `Send + Sync` so results can cross the async
/// trait boundary of [`spotify::SpotifyApi`].
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Console line prefixed with a blue `o`.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Console line prefixed with a green `✓`, e.g. `success!("Saved to {}", path)`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line and exits with status 1.
///
/// Reserved for the fatal tier: configuration, authentication, pagination
/// and export write failures.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Console line prefixed with a yellow `!`. Used for skipped feature batches.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
