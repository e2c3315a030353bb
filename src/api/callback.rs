use axum::{
    Extension,
    extract::Query,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    error::Error,
    management::{LATEST_SESSION, StoredToken},
    server::AppState,
    success, warning,
};

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
}

/// Where Spotify sends the user back to after the consent screen.
///
/// On success the token bundle is kept in the token store under
/// [`LATEST_SESSION`] and the browser continues to the playlist page with the
/// access token in the query. Errors from Spotify or from the exchange send
/// the browser back to the front page with an `error` parameter.
pub async fn callback(
    Query(params): Query<CallbackParams>,
    Extension(state): Extension<AppState>,
) -> Response {
    if let Some(error) = params.error {
        return error_redirect(&state, &error);
    }

    let Some(code) = params.code.filter(|c| !c.is_empty()) else {
        return Error::InvalidInput("Missing authorization code".to_string()).into_response();
    };

    match state.auth.exchange_code(&code).await {
        Ok(bundle) => {
            let target = format!(
                "{base}/playlist?access_token={token}",
                base = state.app_base_url,
                token = urlencoding::encode(&bundle.access_token)
            );
            state
                .tokens
                .put(LATEST_SESSION, StoredToken::new(bundle))
                .await;
            success!("Authorization code exchanged.");
            Redirect::to(&target).into_response()
        }
        Err(e) => {
            warning!("Auth error: {}", e);
            error_redirect(&state, &e.to_string())
        }
    }
}

fn error_redirect(state: &AppState, error: &str) -> Response {
    Redirect::to(&format!(
        "{base}/?error={error}",
        base = state.app_base_url,
        error = urlencoding::encode(error)
    ))
    .into_response()
}
