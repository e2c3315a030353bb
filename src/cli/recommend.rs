use std::sync::Arc;

use tabled::Table;

use crate::{
    claude::ClaudeClient,
    cli::{fail, history::fetch_tracks, spinner},
    config::Settings,
    error::Error,
    info,
    recommendation::RecommendationEngine,
    success,
    types::RecommendationTableRow,
    warning,
};

pub async fn recommend(settings: &Settings, token: &str, limit: u32) {
    let Some(claude) = settings.claude.clone() else {
        fail(Error::Config("Claude API key not configured".to_string()));
    };

    let tracks = fetch_tracks(settings, token, limit).await;
    if tracks.is_empty() {
        warning!("No recent songs found, nothing to base recommendations on.");
        return;
    }
    info!("Using {} recently played tracks", tracks.len());

    let client = settings.http_client().unwrap_or_else(|e| fail(e));
    let engine = RecommendationEngine::new(Arc::new(ClaudeClient::new(claude, client)));

    let pb = spinner("Asking Claude for recommendations...");
    let result = engine.recommend(&tracks).await;
    pb.finish_and_clear();

    let songs = result.unwrap_or_else(|e| fail(e));
    success!("{} recommendations", songs.len());

    let rows: Vec<RecommendationTableRow> =
        songs.iter().map(RecommendationTableRow::from).collect();
    println!("{}", Table::new(rows));

    for song in &songs {
        println!("{} - {}: {}", song.name, song.artist, song.external_link);
    }
}
