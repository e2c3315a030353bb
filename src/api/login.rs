use axum::{Extension, response::Redirect};

use crate::server::AppState;

pub async fn login(Extension(state): Extension<AppState>) -> Redirect {
    Redirect::temporary(state.auth.build_authorization_url().as_str())
}
