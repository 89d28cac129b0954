use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// The invocation event: everything one playlist build needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistRequest {
    pub playlist_name: String,
    pub auth_code: String,
    pub number_of_songs_to_add: usize,
    pub artist_list: Vec<String>,
}

impl PlaylistRequest {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Per-request identity, alive for a single build.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Playlist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchArtistsResponse {
    pub artists: ArtistPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistPage {
    pub items: Vec<ArtistItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Vec<TrackItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksToPlaylistRequest {
    pub uris: Vec<String>,
}

/// Outcome of resolving one lineup entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistResolution {
    pub artist_name: String,
    pub artist_id: Option<String>,
    pub track_uris: Vec<String>,
}

impl ArtistResolution {
    pub fn unresolved(artist_name: impl Into<String>) -> Self {
        Self {
            artist_name: artist_name.into(),
            artist_id: None,
            track_uris: Vec::new(),
        }
    }
}

/// Artist names that could not be resolved, in the order they failed.
///
/// A name is recorded at most once even if several steps fail for it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FailureReport(Vec<String>);

impl FailureReport {
    pub fn record(&mut self, artist_name: &str) {
        if !self.contains(artist_name) {
            self.0.push(artist_name.to_string());
        }
    }

    pub fn contains(&self, artist_name: &str) -> bool {
        self.0.iter().any(|a| a == artist_name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn artists(&self) -> &[String] {
        &self.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistReport {
    pub playlist: Playlist,
    pub artists: Vec<ArtistResolution>,
    pub failed: FailureReport,
}

impl PlaylistReport {
    pub fn track_count(&self) -> usize {
        self.artists.iter().map(|a| a.track_uris.len()).sum()
    }
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub artist: String,
    pub id: String,
    pub tracks: usize,
    pub status: String,
}

/// Consent-flow state shared between the CLI and the `/callback` handler.
#[derive(Debug, Clone)]
pub struct PendingGrant {
    pub state: String,
    pub code: Option<String>,
}
