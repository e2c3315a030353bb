//! Configuration management for vibefm.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)
//!
//! Everything is collected once into [`Settings`], which the Spotify and
//! Claude clients are built from. Missing required values surface as
//! [`Error::Config`] instead of panicking.

use std::{env, net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use crate::error::{Error, Result};

pub const DEFAULT_SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_CLAUDE_API_URL: &str = "https://api.anthropic.com/v1";
pub const DEFAULT_CLAUDE_MODEL: &str = "claude-opus-4-6";
pub const DEFAULT_CLAUDE_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `vibefm` directory if it doesn't exist. A missing `.env` file
/// is fine (everything may already be in the environment); a file that exists
/// but cannot be parsed is an error.
///
/// The file is looked up in:
/// - Linux: `~/.local/share/vibefm/.env`
/// - macOS: `~/Library/Application Support/vibefm/.env`
/// - Windows: `%LOCALAPPDATA%/vibefm/.env`
pub async fn load_env() -> Result<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::Config(e.to_string()))?;
    }

    if path.is_file() {
        dotenv::from_path(&path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    }

    Ok(())
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("vibefm/.env");
    path
}

/// Spotify application credentials and endpoints.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
}

/// Anthropic Messages API settings.
#[derive(Debug, Clone)]
pub struct ClaudeConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub spotify: SpotifyConfig,
    /// `None` when `CLAUDE_API_KEY` is unset; recommendation calls then fail
    /// with a configuration error while the rest keeps working.
    pub claude: Option<ClaudeConfig>,
    pub server_addr: SocketAddr,
    /// Where the web front end lives; the auth callback redirects there.
    pub app_base_url: String,
    /// Per-request timeout for outbound calls. `None` keeps reqwest's default.
    pub http_timeout: Option<Duration>,
}

impl Settings {
    /// Reads all settings from the process environment.
    ///
    /// Call [`load_env`] first if a `.env` file should be honored.
    pub fn from_env() -> Result<Self> {
        let spotify = SpotifyConfig {
            client_id: required("SPOTIFY_CLIENT_ID")?,
            client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            redirect_uri: required("SPOTIFY_REDIRECT_URI")?,
            auth_url: or_default("SPOTIFY_API_AUTH_URL", DEFAULT_SPOTIFY_AUTH_URL),
            token_url: or_default("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_TOKEN_URL),
            api_url: or_default("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL),
        };

        let claude = match optional("CLAUDE_API_KEY") {
            Some(api_key) => Some(ClaudeConfig {
                api_key,
                api_url: or_default("CLAUDE_API_URL", DEFAULT_CLAUDE_API_URL),
                model: or_default("CLAUDE_MODEL", DEFAULT_CLAUDE_MODEL),
                max_tokens: parsed("CLAUDE_MAX_TOKENS")?.unwrap_or(DEFAULT_CLAUDE_MAX_TOKENS),
            }),
            None => None,
        };

        let server_addr = or_default("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS);
        let server_addr = SocketAddr::from_str(&server_addr)
            .map_err(|e| Error::Config(format!("SERVER_ADDRESS '{}': {}", server_addr, e)))?;

        let app_base_url = optional("APP_BASE_URL")
            .unwrap_or_else(|| format!("http://{}", server_addr))
            .trim_end_matches('/')
            .to_string();

        let http_timeout = parsed::<u64>("HTTP_TIMEOUT_SECS")?.map(Duration::from_secs);

        Ok(Settings {
            spotify,
            claude,
            server_addr,
            app_base_url,
            http_timeout,
        })
    }

    /// Builds the shared HTTP client honoring the configured timeout.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.http_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn required(key: &str) -> Result<String> {
    optional(key).ok_or_else(|| Error::Config(format!("{} must be set", key)))
}

fn or_default(key: &str, default: &str) -> String {
    optional(key).unwrap_or_else(|| default.to_string())
}

fn parsed<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| Error::Config(format!("{} '{}': {}", key, raw, e))),
        None => Ok(None),
    }
}
