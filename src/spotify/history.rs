use reqwest::{Client, StatusCode};

use crate::{
    config::SpotifyConfig,
    error::{Error, Result},
    types::{RecentlyPlayedResponse, Track},
    utils,
};

/// Page size used when the caller doesn't ask for one.
pub const DEFAULT_HISTORY_LIMIT: u32 = 20;

/// Largest page Spotify serves for this endpoint.
pub const MAX_HISTORY_LIMIT: u32 = 50;

/// Reads the user's recently played tracks.
#[derive(Debug, Clone)]
pub struct HistoryFetcher {
    api_url: String,
    client: Client,
}

impl HistoryFetcher {
    pub fn new(config: &SpotifyConfig, client: Client) -> Self {
        Self {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Fetches up to `limit` recently played items and returns them as
    /// deduplicated, normalized tracks.
    ///
    /// Spotify lists every play, so a track heard twice shows up twice. Only
    /// the first (most recent) occurrence of each id is kept, which leaves the
    /// result in most-recent-first order.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if `limit` is outside `1..=50`; no request is
    ///   made
    /// - [`Error::ProviderAuth`] on `401 Unauthorized`, so the caller can send
    ///   the user through authorization again
    /// - [`Error::ProviderFetch`] for any other status, a transport failure, or
    ///   a body that doesn't decode
    pub async fn fetch_recently_played(
        &self,
        access_token: &str,
        limit: u32,
    ) -> Result<Vec<Track>> {
        if !(1..=MAX_HISTORY_LIMIT).contains(&limit) {
            return Err(Error::InvalidInput(format!(
                "limit must be between 1 and {}, got {}",
                MAX_HISTORY_LIMIT, limit
            )));
        }

        let api_url = format!(
            "{uri}/me/player/recently-played?limit={limit}",
            uri = self.api_url,
            limit = limit
        );

        let res = self
            .client
            .get(&api_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| Error::ProviderFetch(e.to_string()))?;

        let status = res.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::ProviderAuth);
        }
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            let detail = format!("{} {}", status, body);
            return Err(Error::ProviderFetch(detail.trim_end().to_string()));
        }

        let history = res
            .json::<RecentlyPlayedResponse>()
            .await
            .map_err(|e| Error::ProviderFetch(format!("unexpected history response: {}", e)))?;

        let mut tracks: Vec<Track> = history
            .items
            .into_iter()
            .map(|item| Track::from(item.track))
            .collect();
        utils::remove_duplicate_tracks(&mut tracks);

        Ok(tracks)
    }
}
