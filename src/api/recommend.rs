use axum::{
    Extension, Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    server::AppState,
    types::{RecommendedSong, Track},
    warning,
};

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub songs: Option<Vec<Track>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<RecommendedSong>,
}

pub async fn recommend(
    Extension(state): Extension<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Response {
    let songs = match payload {
        Ok(Json(RecommendRequest { songs: Some(songs) })) if !songs.is_empty() => songs,
        Ok(_) => return no_songs(),
        Err(rejection) => {
            warning!("Rejected recommend body: {}", rejection.body_text());
            return no_songs();
        }
    };

    let Some(engine) = state.engine.as_ref() else {
        return Error::Config("Claude API key not configured".to_string()).into_response();
    };

    match engine.recommend(&songs).await {
        Ok(recommendations) => Json(RecommendationsResponse { recommendations }).into_response(),
        Err(e) => e.into_response(),
    }
}

fn no_songs() -> Response {
    Error::InvalidInput("Please provide a list of songs".to_string()).into_response()
}
