use std::sync::Arc;

use crate::{
    cli::fail,
    config::Settings,
    info,
    management::MemoryTokenStore,
    server::{self, AppState},
    warning,
};

pub async fn serve(settings: &Settings) {
    let state = AppState::from_settings(settings, Arc::new(MemoryTokenStore::new()))
        .unwrap_or_else(|e| fail(e));

    if state.engine.is_none() {
        warning!("CLAUDE_API_KEY is not set, /api/recommend will fail until it is.");
    }
    info!("Listening on http://{}", settings.server_addr);

    if let Err(e) = server::start_api_server(settings, state).await {
        fail(e);
    }
}
