//! # Spotify Integration Module
//!
//! Everything that talks to Spotify on the user's behalf:
//!
//! - [`auth`] - the authorization code flow: building the consent URL and
//!   exchanging the returned code for tokens with the app's client secret
//! - [`history`] - reading the recently played window and turning it into a
//!   deduplicated list of [`Track`](crate::types::Track)s
//!
//! Both clients are stateless between calls. Access tokens are passed in by
//! the caller and never stored here.
//!
//! ## API Coverage
//!
//! - `GET  /authorize` - user consent (URL only, no request is made)
//! - `POST /api/token` - authorization code exchange
//! - `GET  /me/player/recently-played` - listening history
//!
//! All endpoints are configurable so tests and proxies can stand in for
//! Spotify; see [`crate::config::SpotifyConfig`].

pub mod auth;
pub mod history;

pub use auth::AuthorizationClient;
pub use history::{DEFAULT_HISTORY_LIMIT, HistoryFetcher, MAX_HISTORY_LIMIT};
