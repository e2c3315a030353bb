use tabled::Table;

use crate::{
    cli::{fail, spinner},
    config::Settings,
    spotify::HistoryFetcher,
    types::{Track, TrackTableRow},
    warning,
};

pub async fn history(settings: &Settings, token: &str, limit: u32) {
    let tracks = fetch_tracks(settings, token, limit).await;

    if tracks.is_empty() {
        warning!("No recent songs found.");
        return;
    }

    let rows: Vec<TrackTableRow> = tracks.iter().map(TrackTableRow::from).collect();
    println!("{}", Table::new(rows));
}

pub(super) async fn fetch_tracks(settings: &Settings, token: &str, limit: u32) -> Vec<Track> {
    let client = settings.http_client().unwrap_or_else(|e| fail(e));
    let fetcher = HistoryFetcher::new(&settings.spotify, client);

    let pb = spinner("Fetching recently played tracks...");
    let result = fetcher.fetch_recently_played(token, limit).await;
    pb.finish_and_clear();

    result.unwrap_or_else(|e| fail(e))
}
