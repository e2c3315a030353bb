use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    error::{Error, Severity},
    warning,
};

pub fn status_code(err: &Error) -> StatusCode {
    match (err, err.severity()) {
        (Error::MalformedAiResponse { .. }, _) => StatusCode::BAD_GATEWAY,
        (_, Severity::BadInput) => StatusCode::BAD_REQUEST,
        (_, Severity::Unauthorized) => StatusCode::UNAUTHORIZED,
        (_, Severity::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
        (_, Severity::Misconfigured) | (_, Severity::Internal) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Message shown to the browser. Upstream details stay in the log.
fn public_message(err: &Error) -> String {
    match err {
        Error::InvalidInput(msg) | Error::Config(msg) => msg.clone(),
        Error::AuthExchange(_) | Error::MissingToken | Error::ProviderAuth => err.to_string(),
        Error::ProviderFetch(_) => "Failed to fetch Spotify data".to_string(),
        Error::ModelAuth(_) => "Invalid Claude API key".to_string(),
        Error::ModelRateLimit(_) => {
            "Rate limit reached. Please wait a moment and try again.".to_string()
        }
        Error::ModelInvocation(_) => "Failed to generate recommendations".to_string(),
        Error::MalformedAiResponse { .. } => {
            "AI returned malformed response. Please try again.".to_string()
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::MalformedAiResponse { raw, reason } => {
                warning!("AI response could not be parsed ({}), raw response:\n{}", reason, raw)
            }
            _ => warning!("{} [{}]", self, self.kind()),
        }

        let body = Json(json!({
            "error": public_message(&self),
            "kind": self.kind(),
            "retryable": self.is_retryable(),
        }));

        (status_code(&self), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_severity_to_status() {
        assert_eq!(
            status_code(&Error::InvalidInput(String::new())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_code(&Error::ProviderAuth), StatusCode::UNAUTHORIZED);
        assert_eq!(status_code(&Error::MissingToken), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_code(&Error::ModelRateLimit(String::new())),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            status_code(&Error::ModelAuth(String::new())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_code(&Error::ProviderFetch(String::new())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_code(&Error::MalformedAiResponse {
                raw: String::new(),
                reason: String::new()
            }),
            StatusCode::BAD_GATEWAY
        );
    }
}
