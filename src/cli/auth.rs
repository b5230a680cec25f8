use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    config::Config,
    error, info,
    management::TokenManager,
    spotify::{self, SpotifyApi, SpotifyClient},
    success,
    types::PkceToken,
};

pub async fn auth(config: Arc<Config>, force: bool, shared_state: Arc<Mutex<Option<PkceToken>>>) {
    let cached = if force {
        None
    } else {
        TokenManager::load(&config).await.ok()
    };

    let tokens = match cached {
        Some(tokens) => {
            info!("Using cached token");
            tokens
        }
        None => match spotify::auth::auth(Arc::clone(&config), shared_state).await {
            Ok(token) => TokenManager::new(token, &config),
            Err(e) => error!("{}", e),
        },
    };

    let client = match SpotifyClient::new(&config, tokens) {
        Ok(client) => client,
        Err(e) => error!("Failed to build Spotify client: {}", e),
    };

    match client.current_user().await {
        Ok(user) => success!("Logged in as: {}", user.name()),
        Err(e) => error!("Failed to fetch current user: {}", e),
    }
}
