//! Turning the model's reply into [`RecommendedSong`]s.
//!
//! The reply is untrusted text. The only repair applied is removing a
//! markdown code fence around it; whatever remains must be a JSON array of
//! `{name, artist, reason}` objects or the whole reply is rejected.

use serde::Deserialize;

use crate::{
    error::{Error, Result},
    types::RecommendedSong,
    utils,
};

#[derive(Debug, Deserialize)]
struct SuggestedSong {
    name: String,
    artist: String,
    #[serde(default)]
    reason: String,
}

/// Removes one leading ```` ``` ```` / ```` ```json ```` marker and one
/// trailing ```` ``` ```` marker, plus the whitespace around them.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if text
        .get(..7)
        .is_some_and(|head| head.eq_ignore_ascii_case("```json"))
    {
        text = text[7..].trim_start();
    }
    if let Some(rest) = text.strip_prefix("```") {
        text = rest.trim_start();
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }

    text.trim()
}

/// Parses a model reply into enriched songs, preserving order and count.
///
/// # Errors
///
/// [`Error::MalformedAiResponse`] when the fence-stripped text is not a JSON
/// array of objects with string `name` and `artist`, or when any entry has a
/// blank `name` or `artist`. The untouched reply is kept in `raw`.
pub fn parse_recommendations(raw: &str) -> Result<Vec<RecommendedSong>> {
    let malformed = |reason: String| Error::MalformedAiResponse {
        raw: raw.to_string(),
        reason,
    };

    let suggestions: Vec<SuggestedSong> =
        serde_json::from_str(strip_code_fences(raw)).map_err(|e| malformed(e.to_string()))?;

    suggestions
        .into_iter()
        .enumerate()
        .map(|(i, song)| {
            if song.name.trim().is_empty() {
                return Err(malformed(format!("entry {} has an empty name", i)));
            }
            if song.artist.trim().is_empty() {
                return Err(malformed(format!("entry {} has an empty artist", i)));
            }
            Ok(RecommendedSong {
                external_link: utils::spotify_search_link(&song.name, &song.artist),
                name: song.name,
                artist: song.artist,
                reason: song.reason,
            })
        })
        .collect()
}
