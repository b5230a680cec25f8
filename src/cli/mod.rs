//! # CLI Module
//!
//! This module provides the command-line interface layer for spotex. It implements
//! all user-facing commands and coordinates between configuration, the Spotify
//! client, the export pipeline and the file writers.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Runs the OAuth flow when needed and prints the logged-in user
//!
//! ### Export Operations
//!
//! - [`download_tracks`] - Collects every playlist entry and writes them as a JSON array
//! - [`extract_features`] - Collects the playlist, fetches audio features in batches
//!   and writes them as CSV
//!
//! ## Error Handling
//!
//! Commands sort failures into two tiers:
//!
//! - **Fatal**: configuration, authentication, pagination and file-write errors
//!   print a red `[!]` line and exit with status 1
//! - **Recoverable**: a failed audio-features batch prints a warning and the run
//!   continues with fewer records
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotex auth                                   # Authenticate with Spotify
//! spotex download-tracks --output tracks.json   # Raw playlist entries
//! spotex extract-features --output features.csv # Audio features table
//! ```

mod auth;
mod features;
mod tracks;

pub use auth::auth;
pub use features::extract_features;
pub use tracks::download_tracks;
