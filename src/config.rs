//! Configuration management for the Spotify Playlist Export CLI.
//!
//! This module handles loading configuration values from environment variables
//! and `.env` files and turning them into a single [`Config`] value. The value
//! is built once at startup and passed explicitly into the token cache, the
//! OAuth flow and the API client, so no module reads the environment on its own.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file given with `--env-file` or found in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, fmt, path::PathBuf, time::Duration};

pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:9090/callback";
pub const DEFAULT_SCOPE: &str = "playlist-read-private";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:9090";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str, String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(name) => write!(f, "{} must be set", name),
            ConfigError::Invalid(name, value) => {
                write!(f, "{} has an invalid value: {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Canonical credential and endpoint settings for one run.
///
/// Only the client id and client secret are required. Everything else falls
/// back to the public Spotify endpoints and the defaults listed in
/// `.env.example`.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: String,
    pub playlist_id: Option<String>,
    pub api_url: String,
    pub auth_url: String,
    pub token_url: String,
    pub server_address: String,
    pub timeout: Duration,
    pub cache_dir: PathBuf,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// Call [`load_env`] first so values from the `.env` file are visible.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required variable is missing or a
    /// numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset, so a template line such as
    /// `SPOTIFY_PLAYLIST_ID=` falls back to the default.
    ///
    /// # Example
    ///
    /// ```
    /// use spotex::config::Config;
    ///
    /// let config = Config::from_vars(|name| match name {
    ///     "SPOTIFY_API_AUTH_CLIENT_ID" => Some("abc123".to_string()),
    ///     "SPOTIFY_API_AUTH_CLIENT_SECRET" => Some("def456".to_string()),
    ///     _ => None,
    /// })?;
    /// assert!(config.playlist_id.is_none());
    /// # Ok::<(), spotex::config::ConfigError>(())
    /// ```
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let timeout_secs = match get("SPOTIFY_API_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("SPOTIFY_API_TIMEOUT_SECS", raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let cache_dir = get("SPOTEX_CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_cache_dir);

        Ok(Self {
            client_id: required("SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: required("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            redirect_uri: get("SPOTIFY_API_REDIRECT_URI")
                .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string()),
            scope: get("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
            playlist_id: get("SPOTIFY_PLAYLIST_ID"),
            api_url: get("SPOTIFY_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            auth_url: get("SPOTIFY_API_AUTH_URL").unwrap_or_else(|| DEFAULT_AUTH_URL.to_string()),
            token_url: get("SPOTIFY_API_TOKEN_URL")
                .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            server_address: get("SERVER_ADDRESS")
                .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            cache_dir,
        })
    }

    /// Resolves the playlist to export.
    ///
    /// A playlist passed on the command line wins over `SPOTIFY_PLAYLIST_ID`.
    /// Either may be a bare id, a `spotify:playlist:` URI or a share URL; the
    /// result is always the bare id.
    pub fn playlist(&self, cli_override: Option<String>) -> Result<String, ConfigError> {
        let raw = cli_override
            .filter(|p| !p.trim().is_empty())
            .or_else(|| self.playlist_id.clone())
            .ok_or(ConfigError::Missing("SPOTIFY_PLAYLIST_ID"))?;

        playlist_id(&raw).ok_or(ConfigError::Invalid("SPOTIFY_PLAYLIST_ID", raw))
    }
}

/// Extracts the bare playlist id from an id, URI or share URL.
///
/// ```
/// use spotex::config::playlist_id;
///
/// let id = Some("37i9dQZF1DXcBWIGoYBM5M".to_string());
/// assert_eq!(playlist_id("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M"), id);
/// assert_eq!(playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=ab"), id);
/// ```
pub fn playlist_id(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let id = if let Some((_, id)) = raw.rsplit_once(":playlist:") {
        id
    } else if let Some((_, rest)) = raw.split_once("/playlist/") {
        rest.split(['?', '#', '/']).next().unwrap_or_default()
    } else {
        raw
    };

    (!id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())).then(|| id.to_string())
}

/// Loads environment variables from a `.env` file.
///
/// When `path` is given that file must exist and parse. Otherwise the file is
/// looked up in the platform-specific local data directory under
/// `spotex/.env`, and a missing file there is not an error because every
/// value may also come from the process environment.
///
/// # Directory Structure
///
/// The default `.env` location is:
/// - Linux: `~/.local/share/spotex/.env`
/// - macOS: `~/Library/Application Support/spotex/.env`
/// - Windows: `%LOCALAPPDATA%/spotex/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file exists but cannot be read or parsed
pub async fn load_env(path: Option<PathBuf>) -> Result<PathBuf, String> {
    let path = match path {
        Some(path) => path,
        None => {
            let path = default_env_path();
            if let Some(parent) = path.parent() {
                async_fs::create_dir_all(parent)
                    .await
                    .map_err(|e| e.to_string())?;
            }
            if !path.is_file() {
                return Ok(path);
            }
            path
        }
    };

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    Ok(path)
}

fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotex");
    path
}

fn default_env_path() -> PathBuf {
    data_dir().join(".env")
}

fn default_cache_dir() -> PathBuf {
    data_dir().join("cache")
}
