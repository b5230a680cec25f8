use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, config::Config, types::PkceToken, warning};

pub fn router(state: Arc<Mutex<Option<PkceToken>>>, config: Arc<Config>) -> Router {
    Router::new().route("/health", get(api::health)).route(
        "/callback",
        get(api::callback).layer((Extension(state), Extension(config))),
    )
}

pub async fn start_api_server(state: Arc<Mutex<Option<PkceToken>>>, config: Arc<Config>) {
    let addr = match SocketAddr::from_str(&config.server_address) {
        Ok(addr) => addr,
        Err(e) => {
            warning!("Failed to parse server address {}: {}", config.server_address, e);
            return;
        }
    };

    let app = router(state, config);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            warning!("Failed to bind callback server to {}: {}", addr, e);
            return;
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        warning!("Callback server stopped: {}", e);
    }
}
