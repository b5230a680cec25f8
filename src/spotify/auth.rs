use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::{Client, Url};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::{
    Res,
    config::Config,
    info,
    management::TokenManager,
    server::start_api_server,
    success,
    types::{PkceToken, Token},
    utils, warning,
};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
}

impl TokenResponse {
    fn into_token(self, previous_refresh_token: Option<&str>) -> Token {
        Token {
            access_token: self.access_token,
            // Spotify may omit the refresh token on refresh; the old one stays valid.
            refresh_token: self
                .refresh_token
                .or_else(|| previous_refresh_token.map(str::to_string))
                .unwrap_or_default(),
            scope: self.scope.unwrap_or_default(),
            expires_in: self.expires_in.unwrap_or(3600),
            obtained_at: Utc::now().timestamp() as u64,
        }
    }
}

/// Runs the browser authorization flow and caches the resulting token.
///
/// Starts the local callback server, opens the Spotify consent page and waits
/// up to 60 seconds for the callback to deliver a token.
///
/// # Errors
///
/// Returns an error if the authorization URL cannot be built, no token
/// arrives in time, or the token cannot be written to the cache.
pub async fn auth(config: Arc<Config>, shared_state: Arc<Mutex<Option<PkceToken>>>) -> Res<Token> {
    // generate PKCE verifier and challenge
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    let auth_url = authorize_url(&config, &code_challenge)?;

    // Store verifier in shared state before redirect
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier,
            token: None,
        });
    }

    let server_state = Arc::clone(&shared_state);
    let server_config = Arc::clone(&config);
    tokio::spawn(async move {
        start_api_server(server_state, server_config).await;
    });

    info!("Waiting for Spotify authorization...");
    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let Some(token) = wait_for_token(shared_state).await else {
        return Err("Authentication failed or timed out.".into());
    };

    let token_manager = TokenManager::new(token.clone(), &config);
    token_manager
        .persist()
        .await
        .map_err(|e| format!("Failed to save token to cache: {}", e))?;

    success!("Authentication successful!");
    Ok(token)
}

/// Builds the `/authorize` URL with a properly encoded query string.
pub fn authorize_url(config: &Config, code_challenge: &str) -> Res<Url> {
    let url = Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("code_challenge", code_challenge),
            ("code_challenge_method", "S256"),
            ("scope", config.scope.as_str()),
        ],
    )?;
    Ok(url)
}

async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(pkce_token) = lock.as_ref() {
            if let Some(token) = &pkce_token.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

pub async fn refresh_token(
    token_url: &str,
    client_id: &str,
    client_secret: &str,
    current: &Token,
) -> Result<Token, String> {
    let client = Client::new();
    let res = client
        .post(token_url)
        .basic_auth(client_id, Some(client_secret))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", current.refresh_token.as_str()),
            ("client_id", client_id),
        ])
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| e.to_string())?;

    let json: TokenResponse = res.json().await.map_err(|e| e.to_string())?;
    Ok(json.into_token(Some(&current.refresh_token)))
}

pub async fn exchange_code_pkce(
    config: &Config,
    code: &str,
    verifier: &str,
) -> Result<Token, reqwest::Error> {
    let client = Client::builder().timeout(config.timeout).build()?;
    let res = client
        .post(&config.token_url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", config.client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", config.redirect_uri.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json: TokenResponse = res.json().await?;
    Ok(json.into_token(None))
}
