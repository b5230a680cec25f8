//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API that the export
//! pipeline runs against. It covers authentication, playlist pagination, audio
//! feature lookups and the current-user check used by `spotex auth`.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Pipeline (collect, enrich)
//!          ↓
//! SpotifyApi trait
//!     ├── SpotifyClient (reqwest, bearer token)
//!     └── test doubles
//!          ↓
//! Spotify Web API
//! ```
//!
//! The pipeline never talks to reqwest directly. It only sees [`SpotifyApi`],
//! which keeps the pagination and batching logic testable with canned pages
//! and canned batch failures.
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 authorization code flow with PKCE:
//! - **Browser Integration**: Opens the authorization URL in the default browser
//! - **Local Callback Server**: Temporary axum server receiving the redirect
//! - **Token Exchange**: Exchanges code + verifier for access and refresh tokens
//! - **Token Refresh**: Refreshes expired access tokens with the refresh token
//!
//! ### Client Module
//!
//! [`client`] - The reqwest-backed [`SpotifyClient`]:
//! - **Single HTTP Client**: Built once with the configured request timeout
//! - **Token Lifecycle**: Pulls a valid bearer token from the token cache per request
//! - **Status Handling**: Non-2xx responses become errors for the caller
//!
//! ## API Coverage
//!
//! - `GET /playlists/{id}/tracks` - Playlist items with offset pagination
//! - `GET {next}` - Following pages, using the absolute `next` URL
//! - `GET /audio-features?ids=` - Audio features for up to 100 tracks
//! - `GET /me` - The authenticated user
//! - `POST /api/token` - Token exchange and refresh operations
//!
//! ## Error Handling
//!
//! No call is retried. A failing page request ends the collection, a failing
//! audio-features request is skipped by the enricher. Both surface here as a
//! plain [`Res`] error.

pub mod auth;
pub mod client;

pub use client::SpotifyClient;

use async_trait::async_trait;

use crate::{
    Res,
    types::{FeatureRecord, Page, PlaylistItem, User},
};

/// Remote operations the export pipeline depends on.
///
/// Implemented by [`SpotifyClient`] for the real API. Tests implement it with
/// in-memory fakes.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    /// First page of a playlist's items, `limit` items per page.
    async fn playlist_items(&self, playlist_id: &str, limit: u32) -> Res<Page<PlaylistItem>>;

    /// The page following `previous`.
    ///
    /// Fails if `previous` has no `next` cursor.
    async fn next_page(&self, previous: &Page<PlaylistItem>) -> Res<Page<PlaylistItem>>;

    /// Audio features for a batch of track ids.
    ///
    /// Ids the API knows nothing about produce no record.
    async fn audio_features(&self, ids: &[String]) -> Res<Vec<FeatureRecord>>;

    async fn current_user(&self) -> Res<User>;
}
