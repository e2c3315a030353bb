use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use chrono::Local;
use tokio::net::TcpListener;

use crate::{
    cli::fail,
    config::Settings,
    error, info,
    management::{LATEST_SESSION, MemoryTokenStore, StoredToken, TokenStore},
    server::{self, AppState},
    spotify::AuthorizationClient,
    success, warning,
};

const MAX_WAIT: Duration = Duration::from_secs(60);

/// Runs the authorization code flow end to end from the terminal.
///
/// 1. Starts the gateway on `SERVER_ADDRESS` so Spotify's redirect has
///    somewhere to land (the redirect URI must point at its `/api/auth`)
/// 2. Opens the consent screen in the default browser
/// 3. Waits up to 60 seconds for the callback to exchange the code
/// 4. Prints the resulting tokens
///
/// Nothing is written to disk. Export the printed access token as
/// `SPOTIFY_ACCESS_TOKEN` for the other commands.
pub async fn auth(settings: &Settings) {
    let store = Arc::new(MemoryTokenStore::new());
    let state = AppState::from_settings(settings, store.clone()).unwrap_or_else(|e| fail(e));
    let auth_url = state.auth.build_authorization_url();

    let listener = match TcpListener::bind(settings.server_addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", settings.server_addr, e),
    };

    tokio::spawn(async move {
        if let Err(e) = server::serve(listener, state).await {
            warning!("{}", e);
        }
    });

    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }
    info!(
        "Waiting for Spotify to redirect to {}",
        settings.spotify.redirect_uri
    );

    match wait_for_token(store.as_ref()).await {
        Some(token) => {
            if token.is_expired() {
                warning!(
                    "Spotify issued a token that expires within minutes ({}s).",
                    token.bundle.expires_in_seconds
                );
            }
            success!("Authentication successful!");
            info!("Access token: {}", token.bundle.access_token);
            info!("Refresh token: {}", token.bundle.refresh_token);
            info!(
                "Expires at: {}",
                token
                    .expires_at()
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M:%S")
            );
            info!(
                "Use it with: export SPOTIFY_ACCESS_TOKEN={}",
                token.bundle.access_token
            );
        }
        None => error!("Authentication failed or timed out."),
    }
}

/// Prints the URL of Spotify's consent screen.
pub fn login_url(settings: &Settings) {
    let client = settings
        .http_client()
        .and_then(|client| AuthorizationClient::new(settings.spotify.clone(), client))
        .unwrap_or_else(|e| fail(e));

    println!("{}", client.build_authorization_url());
}

/// Polls the store once a second until the callback has left a token there.
async fn wait_for_token(store: &dyn TokenStore) -> Option<StoredToken> {
    let start = Instant::now();

    while start.elapsed() < MAX_WAIT {
        if let Some(token) = store.take(LATEST_SESSION).await {
            return Some(token);
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
