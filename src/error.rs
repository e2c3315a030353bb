//! Error taxonomy shared by every stage of the pipeline.
//!
//! Each failure is classified where it happens (token exchange, history
//! fetch, model call, response parsing) and travels up as one of the
//! variants below. Callers decide what to do with it through
//! [`Error::severity`] and [`Error::is_retryable`]; nothing in the crate
//! retries on its own.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The caller handed us something unusable, e.g. an empty track list.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Spotify refused the authorization code exchange. Carries the raw body.
    #[error("Token exchange failed: {0}")]
    AuthExchange(String),

    /// A request that needs a Spotify bearer token came without one.
    #[error("Missing access token")]
    MissingToken,

    /// The bearer token was rejected while fetching history.
    #[error("Spotify token expired. Please log in again.")]
    ProviderAuth,

    /// Any other failed history fetch.
    #[error("Spotify API error: {0}")]
    ProviderFetch(String),

    /// The AI provider rejected our API key.
    #[error("Invalid Claude API key: {0}")]
    ModelAuth(String),

    /// The AI provider is throttling us.
    #[error("Rate limit reached: {0}")]
    ModelRateLimit(String),

    /// Network failure, timeout or unexpected status from the AI provider.
    #[error("Claude API error: {0}")]
    ModelInvocation(String),

    /// The model answered, but not with the JSON array we asked for.
    #[error("AI returned malformed response: {reason}")]
    MalformedAiResponse { raw: String, reason: String },

    /// Missing or unparsable configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// How bad a failure is from the point of view of whoever called us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    BadInput,
    Unauthorized,
    RateLimited,
    Misconfigured,
    Internal,
}

impl Error {
    pub fn severity(&self) -> Severity {
        match self {
            Error::InvalidInput(_) => Severity::BadInput,
            Error::MissingToken | Error::ProviderAuth => Severity::Unauthorized,
            Error::ModelRateLimit(_) => Severity::RateLimited,
            Error::ModelAuth(_) | Error::Config(_) => Severity::Misconfigured,
            Error::AuthExchange(_)
            | Error::ProviderFetch(_)
            | Error::ModelInvocation(_)
            | Error::MalformedAiResponse { .. } => Severity::Internal,
        }
    }

    /// Whether trying the same call again later can reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::ModelRateLimit(_)
                | Error::ModelInvocation(_)
                | Error::MalformedAiResponse { .. }
        )
    }

    /// Stable name of the variant, used in gateway error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => "invalid_input",
            Error::AuthExchange(_) => "auth_exchange",
            Error::MissingToken => "missing_token",
            Error::ProviderAuth => "provider_auth",
            Error::ProviderFetch(_) => "provider_fetch",
            Error::ModelAuth(_) => "model_auth",
            Error::ModelRateLimit(_) => "model_rate_limit",
            Error::ModelInvocation(_) => "model_invocation",
            Error::MalformedAiResponse { .. } => "malformed_ai_response",
            Error::Config(_) => "config",
        }
    }
}
