use base64::{Engine, engine::general_purpose::STANDARD};
use rand::{Rng, distr::Alphanumeric};

use crate::types::{ArtistTableRow, PlaylistReport, TrackItem};

pub const PLAYLIST_SUFFIX: &str = " - Unofficial";

/// Random value for the `state` parameter of the consent flow.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Value of the `Authorization` header for the token endpoint.
pub fn basic_credential(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", client_id, client_secret))
    )
}

pub fn playlist_title(playlist_name: &str) -> String {
    format!("{}{}", playlist_name, PLAYLIST_SUFFIX)
}

/// URL-encoded `q` parameter for an artist search.
pub fn artist_search_query(artist_name: &str) -> String {
    urlencoding::encode(&format!("artist:{}", artist_name)).into_owned()
}

pub fn track_uri(track_id: &str) -> String {
    format!("spotify:track:{}", track_id)
}

/// Track URIs for the first `limit` tracks, in the order given.
pub fn select_top_tracks(tracks: &[TrackItem], limit: usize) -> Vec<String> {
    tracks
        .iter()
        .take(limit)
        .map(|t| track_uri(&t.id))
        .collect()
}

/// Parses a lineup file: one artist per line, blank lines and `#` comments
/// are ignored.
pub fn parse_lineup(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(String::from)
        .collect()
}

pub fn report_table_rows(report: &PlaylistReport) -> Vec<ArtistTableRow> {
    report
        .artists
        .iter()
        .map(|a| ArtistTableRow {
            artist: a.artist_name.clone(),
            id: a.artist_id.clone().unwrap_or_else(|| "-".to_string()),
            tracks: a.track_uris.len(),
            status: if report.failed.contains(&a.artist_name) {
                "failed".to_string()
            } else {
                "added".to_string()
            },
        })
        .collect()
}
