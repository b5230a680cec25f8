use std::sync::Arc;

use serde_json::Value;
use spotex::{config::Config, server::router, types::PkceToken};
use tokio::{net::TcpListener, sync::Mutex};

// Helper function to serve the callback router on a free local port
async fn spawn_server(state: Arc<Mutex<Option<PkceToken>>>) -> String {
    let config = Config::from_vars(|name| match name {
        "SPOTIFY_API_AUTH_CLIENT_ID" => Some("client".to_string()),
        "SPOTIFY_API_AUTH_CLIENT_SECRET" => Some("secret".to_string()),
        _ => None,
    })
    .unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(state, Arc::new(config));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_health_reports_name_and_version() {
    let base = spawn_server(Arc::new(Mutex::new(None))).await;

    let json: Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(json["status"], "ok");
    assert_eq!(json["name"], "spotex");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_callback_reports_denied_authorization() {
    let state = Arc::new(Mutex::new(None));
    let base = spawn_server(Arc::clone(&state)).await;

    let response = reqwest::get(format!("{}/callback?error=access_denied", base))
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert!(response.text().await.unwrap().contains("Authorization denied"));
    assert!(state.lock().await.is_none());
}

#[tokio::test]
async fn test_callback_without_code() {
    let base = spawn_server(Arc::new(Mutex::new(None))).await;

    let body = reqwest::get(format!("{}/callback", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("Missing authorization code"));
}

#[tokio::test]
async fn test_callback_without_pending_flow() {
    let base = spawn_server(Arc::new(Mutex::new(None))).await;

    let body = reqwest::get(format!("{}/callback?code=abc", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("Missing PKCE code verifier"));
}
