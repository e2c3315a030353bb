use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A track from the user's listening history, normalized from a Spotify
/// play-history item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Empty for local files and for tracks posted back without one.
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Contributing artists joined with `", "`, in provider order.
    pub artist: String,
    #[serde(default)]
    pub album: String,
    #[serde(default, alias = "albumArt")]
    pub album_art_url: Option<String>,
    #[serde(default, alias = "spotifyLink")]
    pub external_link: String,
}

/// A song suggested by the model. It has no `id` since nothing checks that the
/// song exists in any catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedSong {
    pub name: String,
    pub artist: String,
    pub reason: String,
    /// Spotify search link built from name and artist. Not a catalog reference.
    pub external_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBundle {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in_seconds: u64,
}

/// Body of a successful `POST /api/token`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: u64,
}

impl From<TokenResponse> for TokenBundle {
    fn from(res: TokenResponse) -> Self {
        TokenBundle {
            access_token: res.access_token,
            refresh_token: res.refresh_token,
            expires_in_seconds: res.expires_in,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentlyPlayedResponse {
    pub items: Vec<PlayHistoryItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayHistoryItem {
    pub track: SpotifyTrack,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyTrack {
    /// `null` for local files.
    pub id: Option<String>,
    pub name: String,
    pub artists: Vec<SpotifyArtist>,
    pub album: SpotifyAlbum,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyAlbum {
    pub name: String,
    #[serde(default)]
    pub images: Vec<SpotifyImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyImage {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

impl From<SpotifyTrack> for Track {
    fn from(t: SpotifyTrack) -> Track {
        Track {
            id: t.id.unwrap_or_default(),
            name: t.name,
            artist: t
                .artists
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<&str>>()
                .join(", "),
            album: t.album.name,
            album_art_url: t.album.images.into_iter().next().map(|i| i.url),
            external_link: t.external_urls.spotify.unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artist: String,
    pub album: String,
}

impl From<&Track> for TrackTableRow {
    fn from(t: &Track) -> Self {
        TrackTableRow {
            name: t.name.clone(),
            artist: t.artist.clone(),
            album: t.album.clone(),
        }
    }
}

#[derive(Tabled)]
pub struct RecommendationTableRow {
    pub name: String,
    pub artist: String,
    pub reason: String,
}

impl From<&RecommendedSong> for RecommendationTableRow {
    fn from(s: &RecommendedSong) -> Self {
        RecommendationTableRow {
            name: s.name.clone(),
            artist: s.artist.clone(),
            reason: s.reason.clone(),
        }
    }
}
