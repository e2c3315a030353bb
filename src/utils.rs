use std::collections::HashSet;

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::types::Track;

pub const SPOTIFY_SEARCH_URL: &str = "https://open.spotify.com/search";

/// Keeps the first occurrence of every track id and drops later repeats.
/// Relative order of the survivors is unchanged.
pub fn remove_duplicate_tracks(tracks: &mut Vec<Track>) {
    let mut seen_ids = HashSet::new();
    tracks.retain(|track| seen_ids.insert(track.id.clone()));
}

/// Value for an `Authorization: Basic` header.
pub fn basic_credentials(client_id: &str, client_secret: &str) -> String {
    STANDARD.encode(format!("{}:{}", client_id, client_secret))
}

/// Spotify web search link for a song, with `"{name} {artist}"` percent-encoded
/// as a single path segment.
pub fn spotify_search_link(name: &str, artist: &str) -> String {
    format!(
        "{base}/{query}",
        base = SPOTIFY_SEARCH_URL,
        query = urlencoding::encode(&format!("{} {}", name, artist))
    )
}

/// Pulls the token out of an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
