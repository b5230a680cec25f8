use std::collections::HashSet;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::{
    Res,
    config::Config,
    management::TokenManager,
    spotify::SpotifyApi,
    types::{AudioFeaturesResponse, FeatureRecord, Page, PlaylistItem, User},
    warning,
};

/// Per-request item limit of the playlist items endpoint.
pub const MAX_PAGE_SIZE: u32 = 100;

pub struct SpotifyClient {
    http: Client,
    api_url: String,
    tokens: Mutex<TokenManager>,
}

impl SpotifyClient {
    /// Builds a client around an already loaded token cache.
    ///
    /// The request timeout from `config` applies to every call made through
    /// this client.
    pub fn new(config: &Config, tokens: TokenManager) -> Res<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            tokens: Mutex::new(tokens),
        })
    }

    /// Builds a client from the token cached by `spotex auth`.
    pub async fn connect(config: &Config) -> Res<Self> {
        let tokens = TokenManager::load(config)
            .await
            .map_err(|e| format!("Failed to load token. Please run spotex auth\n Error: {}", e))?;
        Self::new(config, tokens)
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Res<T> {
        let token = self.tokens.lock().await.get_valid_token().await;
        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl SpotifyApi for SpotifyClient {
    async fn playlist_items(&self, playlist_id: &str, limit: u32) -> Res<Page<PlaylistItem>> {
        let api_url = format!(
            "{uri}/playlists/{id}/tracks?limit={limit}&offset=0",
            uri = self.api_url,
            id = playlist_id,
            limit = limit.clamp(1, MAX_PAGE_SIZE)
        );
        self.get(&api_url).await
    }

    async fn next_page(&self, previous: &Page<PlaylistItem>) -> Res<Page<PlaylistItem>> {
        let Some(next) = previous.next.as_deref() else {
            return Err("previous page has no next cursor".into());
        };
        self.get(next).await
    }

    async fn audio_features(&self, ids: &[String]) -> Res<Vec<FeatureRecord>> {
        let api_url = format!(
            "{uri}/audio-features?ids={ids}",
            uri = self.api_url,
            ids = ids.join(",")
        );
        let response: AudioFeaturesResponse = self.get(&api_url).await?;
        let records: Vec<FeatureRecord> = response.audio_features.into_iter().flatten().collect();

        let misaligned = count_misaligned(ids, &records);
        if misaligned > 0 {
            warning!(
                "{} of {} audio feature records carry a track id that was not requested",
                misaligned,
                records.len()
            );
        }

        Ok(records)
    }

    async fn current_user(&self) -> Res<User> {
        self.get(&format!("{uri}/me", uri = self.api_url)).await
    }
}

/// Number of records whose `id` is missing or not part of `requested`.
pub fn count_misaligned(requested: &[String], records: &[FeatureRecord]) -> usize {
    let requested: HashSet<&str> = requested.iter().map(String::as_str).collect();
    records
        .iter()
        .filter(|record| {
            record
                .get("id")
                .and_then(|id| id.as_str())
                .is_none_or(|id| !requested.contains(id))
        })
        .count()
}
