use axum::{
    Extension, Json,
    extract::{Query, rejection::QueryRejection},
    http::{HeaderMap, header::AUTHORIZATION},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    error::Error, server::AppState, spotify::DEFAULT_HISTORY_LIMIT, types::Track, utils,
};

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TracksResponse {
    pub tracks: Vec<Track>,
}

pub async fn history(
    headers: HeaderMap,
    params: Result<Query<HistoryParams>, QueryRejection>,
    Extension(state): Extension<AppState>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => {
            return Error::InvalidInput(rejection.body_text()).into_response();
        }
    };

    let token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(utils::bearer_token);

    let Some(token) = token else {
        return Error::MissingToken.into_response();
    };

    match state
        .history
        .fetch_recently_played(token, params.limit.unwrap_or(DEFAULT_HISTORY_LIMIT))
        .await
    {
        Ok(tracks) => Json(TracksResponse { tracks }).into_response(),
        Err(e) => e.into_response(),
    }
}
