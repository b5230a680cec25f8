use std::path::PathBuf;

use chrono::Utc;

use crate::{config::Config, spotify, types::Token, warning};

pub struct TokenManager {
    token: Token,
    client_id: String,
    client_secret: String,
    token_url: String,
    path: PathBuf,
}

impl TokenManager {
    pub fn new(token: Token, config: &Config) -> Self {
        TokenManager {
            token,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            token_url: config.token_url.clone(),
            path: Self::token_path(config),
        }
    }

    pub async fn load(config: &Config) -> Result<Self, String> {
        let path = Self::token_path(config);
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self::new(token, config))
    }

    pub async fn persist(&self) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(&self.path, json)
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn get_valid_token(&mut self) -> String {
        if self.is_expired() {
            match spotify::auth::refresh_token(
                &self.token_url,
                &self.client_id,
                &self.client_secret,
                &self.token,
            )
            .await
            {
                Ok(new_token) => {
                    self.token = new_token;
                    if let Err(e) = self.persist().await {
                        warning!("Failed to save refreshed token: {}", e);
                    }
                }
                Err(e) => warning!("Failed to refresh token: {}", e),
            }
        }

        self.token.access_token.clone()
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= (self.token.obtained_at + self.token.expires_in).saturating_sub(240)
    }

    fn token_path(config: &Config) -> PathBuf {
        config.cache_dir.join("token.json")
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
