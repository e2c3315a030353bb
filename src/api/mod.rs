//! # API Module
//!
//! HTTP endpoints of the vibefm gateway. Each handler is a thin adapter: it
//! pulls arguments out of the request, calls one core operation and turns
//! the result, or the classified [`Error`](crate::error::Error), into a
//! response.
//!
//! ## Endpoints
//!
//! - [`health`] - `GET /health`, status and version
//! - [`login`] - `GET /api/login`, redirects to Spotify's consent screen
//! - [`callback`] - `GET /api/auth`, exchanges the authorization code
//! - [`history`] - `GET /api/spotify`, recently played tracks for a bearer token
//! - [`recommend`] - `POST /api/recommend`, recommendations for `{songs}`
//!
//! ## Error responses
//!
//! Failures are returned as `{"error", "kind", "retryable"}` with a status
//! derived from the error's severity:
//!
//! | Severity        | Status |
//! |-----------------|--------|
//! | bad input       | 400    |
//! | unauthorized    | 401    |
//! | rate limited    | 429    |
//! | misconfigured   | 500    |
//! | internal        | 500 (502 for a malformed AI response) |

mod callback;
mod error;
mod health;
mod history;
mod login;
mod recommend;

pub use callback::callback;
pub use error::status_code;
pub use health::health;
pub use history::{TracksResponse, history};
pub use login::login;
pub use recommend::{RecommendationsResponse, recommend};
