//! vibefm library
//!
//! Turns a Spotify listening history into song recommendations from Claude.
//! The pipeline has three independent stages, composed by passing data along:
//!
//! ```text
//! AuthorizationClient --TokenBundle--> HistoryFetcher --Vec<Track>--> RecommendationEngine
//! ```
//!
//! Each stage makes at most one outbound call per invocation and keeps no
//! state between calls. Failures are classified into [`Error`] at the stage
//! boundary and never retried internally.
//!
//! # Modules
//!
//! - `api` - HTTP handlers of the gateway
//! - `claude` - Anthropic Messages API client behind the `CompletionModel` trait
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy and severities
//! - `management` - Token store used by the gateway
//! - `recommendation` - Prompt construction and response parsing
//! - `server` - axum router and server startup
//! - `spotify` - Authorization and listening history
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vibefm::{claude::ClaudeClient, config, recommendation::RecommendationEngine, spotify};
//!
//! #[tokio::main]
//! async fn main() -> vibefm::Result<()> {
//!     config::load_env().await?;
//!     let settings = config::Settings::from_env()?;
//!     let client = settings.http_client()?;
//!
//!     let history = spotify::HistoryFetcher::new(&settings.spotify, client.clone());
//!     let tracks = history.fetch_recently_played("BQC...", 20).await?;
//!
//!     let claude = ClaudeClient::new(settings.claude.clone().unwrap(), client);
//!     let songs = RecommendationEngine::new(Arc::new(claude)).recommend(&tracks).await?;
//!     println!("{} recommendations", songs.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod claude;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod recommendation;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Error, Result, Severity};

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
///
/// ```rust,ignore
/// info!("Waiting for Spotify to redirect to {}", redirect_uri);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message to stderr with a red exclamation mark and exits
/// the program with status 1.
///
/// Only for the binary's fatal paths. The library core never calls it; it
/// returns [`Error`] instead.
///
/// ```rust,ignore
/// error!("Failed to bind {}: {}", addr, e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning to stderr with a yellow exclamation mark.
///
/// The gateway reports every classified failure through this macro, including
/// the raw model text when a reply can't be parsed.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
