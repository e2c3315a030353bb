#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use vibefm::{
    claude::CompletionModel,
    config::{ClaudeConfig, Settings, SpotifyConfig},
};

pub const GOOD_TOKEN: &str = "good-token";
pub const CLIENT_ID: &str = "client-id";
pub const CLIENT_SECRET: &str = "client-secret";
pub const CLAUDE_KEY: &str = "test-key";

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn spotify_config(base: &str) -> SpotifyConfig {
    SpotifyConfig {
        client_id: CLIENT_ID.to_string(),
        client_secret: CLIENT_SECRET.to_string(),
        redirect_uri: "http://127.0.0.1:3000/api/auth".to_string(),
        auth_url: format!("{}/authorize", base),
        token_url: format!("{}/api/token", base),
        api_url: format!("{}/v1", base),
    }
}

pub fn claude_config(base: &str) -> ClaudeConfig {
    ClaudeConfig {
        api_key: CLAUDE_KEY.to_string(),
        api_url: format!("{}/v1", base),
        model: "claude-test".to_string(),
        max_tokens: 1024,
    }
}

pub fn settings(spotify_base: &str, claude_base: Option<&str>) -> Settings {
    Settings {
        spotify: spotify_config(spotify_base),
        claude: claude_base.map(claude_config),
        server_addr: "127.0.0.1:0".parse::<SocketAddr>().unwrap(),
        app_base_url: "http://app.test".to_string(),
        http_timeout: None,
    }
}

pub fn history_item(id: &str, name: &str, artists: &[&str], image: Option<&str>) -> Value {
    let images: Vec<Value> = image.into_iter().map(|url| json!({ "url": url })).collect();
    json!({
        "played_at": "2026-10-19T10:00:00.000Z",
        "track": {
            "id": id,
            "name": name,
            "artists": artists.iter().map(|a| json!({ "name": a })).collect::<Vec<Value>>(),
            "album": { "name": format!("{} (Album)", name), "images": images },
            "external_urls": { "spotify": format!("https://open.spotify.com/track/{}", id) }
        }
    })
}

/// A fake Spotify Web API that serves `items` to [`GOOD_TOKEN`] and answers
/// `401` to anything else.
#[derive(Clone)]
pub struct FakeSpotify {
    pub items: Arc<Vec<Value>>,
    pub calls: Arc<AtomicUsize>,
    pub last_limit: Arc<Mutex<Option<String>>>,
}

impl FakeSpotify {
    pub fn new(items: Vec<Value>) -> Self {
        Self {
            items: Arc::new(items),
            calls: Arc::new(AtomicUsize::new(0)),
            last_limit: Arc::new(Mutex::new(None)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/v1/me/player/recently-played", get(recently_played))
            .with_state(self.clone())
    }
}

async fn recently_played(
    State(fake): State<FakeSpotify>,
    headers: HeaderMap,
    Query(query): Query<std::collections::HashMap<String, String>>,
) -> Response {
    fake.calls.fetch_add(1, Ordering::SeqCst);
    *fake.last_limit.lock().unwrap() = query.get("limit").cloned();

    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", GOOD_TOKEN));

    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "status": 401, "message": "The access token expired" } })),
        )
            .into_response();
    }

    Json(json!({ "items": fake.items.as_ref(), "limit": 20 })).into_response()
}

/// A fake Anthropic Messages API replying with a fixed text.
#[derive(Clone)]
pub struct FakeClaude {
    pub reply: Arc<String>,
    pub status: StatusCode,
    pub calls: Arc<AtomicUsize>,
    pub last_request: Arc<Mutex<Option<Value>>>,
}

impl FakeClaude {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Arc::new(reply.to_string()),
            status: StatusCode::OK,
            calls: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    pub fn failing(status: StatusCode) -> Self {
        Self {
            status,
            ..Self::replying("")
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/v1/messages", post(messages))
            .with_state(self.clone())
    }
}

async fn messages(
    State(fake): State<FakeClaude>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    fake.calls.fetch_add(1, Ordering::SeqCst);
    *fake.last_request.lock().unwrap() = Some(body);

    let key_ok = headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == CLAUDE_KEY);
    if !key_ok {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "type": "error",
                "error": { "type": "authentication_error", "message": "invalid x-api-key" }
            })),
        )
            .into_response();
    }

    if fake.status != StatusCode::OK {
        return (
            fake.status,
            Json(json!({ "type": "error", "error": { "type": "upstream", "message": "nope" } })),
        )
            .into_response();
    }

    Json(json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "model": "claude-test",
        "content": [{ "type": "text", "text": fake.reply.as_str() }],
        "stop_reason": "end_turn"
    }))
    .into_response()
}

/// In-process model that records prompts instead of calling anything.
pub struct FakeModel {
    pub reply: String,
    pub calls: AtomicUsize,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeModel {
    pub fn replying(reply: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.into(),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionModel for FakeModel {
    async fn complete(&self, prompt: &str) -> vibefm::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

/// A JSON array of `n` distinct recommendations.
pub fn recommendations_json(n: usize) -> String {
    let songs: Vec<Value> = (1..=n)
        .map(|i| {
            json!({
                "name": format!("New Song {}", i),
                "artist": format!("Band & Friends {}", i),
                "reason": "Same late-night synth mood"
            })
        })
        .collect();
    serde_json::to_string_pretty(&songs).unwrap()
}
