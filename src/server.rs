use std::sync::Arc;

use axum::{
    Extension, Router,
    routing::{get, post},
};
use tokio::net::TcpListener;

use crate::{
    api,
    claude::ClaudeClient,
    config::Settings,
    error::{Error, Result},
    management::TokenStore,
    recommendation::RecommendationEngine,
    spotify::{AuthorizationClient, HistoryFetcher},
};

/// Everything a handler needs. Cheap to clone; shared parts sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthorizationClient,
    pub history: HistoryFetcher,
    /// `None` when no Claude API key is configured.
    pub engine: Option<RecommendationEngine>,
    pub tokens: Arc<dyn TokenStore>,
    pub app_base_url: String,
}

impl AppState {
    pub fn from_settings(settings: &Settings, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let client = settings.http_client()?;

        let engine = settings.claude.clone().map(|claude| {
            RecommendationEngine::new(Arc::new(ClaudeClient::new(claude, client.clone())))
        });

        Ok(AppState {
            auth: AuthorizationClient::new(settings.spotify.clone(), client.clone())?,
            history: HistoryFetcher::new(&settings.spotify, client),
            engine,
            tokens,
            app_base_url: settings.app_base_url.clone(),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/login", get(api::login))
        .route("/api/auth", get(api::callback))
        .route("/api/spotify", get(api::history))
        .route("/api/recommend", post(api::recommend))
        .layer(Extension(state))
}

/// Serves the gateway on `listener` until the task is dropped.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, router(state))
        .await
        .map_err(|e| Error::Config(format!("Server error: {}", e)))
}

pub async fn start_api_server(settings: &Settings, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(settings.server_addr).await.map_err(|e| {
        Error::Config(format!("Failed to bind {}: {}", settings.server_addr, e))
    })?;
    serve(listener, state).await
}
