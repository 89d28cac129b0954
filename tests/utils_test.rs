use lineuptunes::types::{
    ArtistResolution, FailureReport, Playlist, PlaylistReport, PlaylistRequest, TrackItem,
};
use lineuptunes::utils::*;

// Helper function to create test tracks with ids t0, t1, ...
fn create_test_tracks(count: usize) -> Vec<TrackItem> {
    (0..count)
        .map(|i| TrackItem {
            id: format!("t{}", i),
            name: format!("Track {}", i),
        })
        .collect()
}

#[test]
fn test_generate_state() {
    let state = generate_state();

    assert_eq!(state.len(), 32);
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated states should be different
    assert_ne!(state, generate_state());
}

#[test]
fn test_basic_credential() {
    assert_eq!(basic_credential("id", "secret"), "Basic aWQ6c2VjcmV0");
    assert_eq!(
        basic_credential("client-id", "client-secret"),
        "Basic Y2xpZW50LWlkOmNsaWVudC1zZWNyZXQ="
    );
}

#[test]
fn test_playlist_title() {
    assert_eq!(playlist_title("Coachella 2025"), "Coachella 2025 - Unofficial");
    assert_eq!(playlist_title(""), " - Unofficial");
}

#[test]
fn test_artist_search_query() {
    assert_eq!(artist_search_query("Artist A"), "artist%3AArtist%20A");
    assert_eq!(
        artist_search_query("Sigur Rós & Friends"),
        "artist%3ASigur%20R%C3%B3s%20%26%20Friends"
    );
}

#[test]
fn test_track_uri() {
    assert_eq!(
        track_uri("4uLU6hMCjMI75M1A2tKUQC"),
        "spotify:track:4uLU6hMCjMI75M1A2tKUQC"
    );
}

#[test]
fn test_select_top_tracks_truncates_in_order() {
    let tracks = create_test_tracks(5);

    let uris = select_top_tracks(&tracks, 2);
    assert_eq!(uris, vec!["spotify:track:t0", "spotify:track:t1"]);
}

#[test]
fn test_select_top_tracks_limited_by_available() {
    let tracks = create_test_tracks(3);

    let uris = select_top_tracks(&tracks, 10);
    assert_eq!(
        uris,
        vec!["spotify:track:t0", "spotify:track:t1", "spotify:track:t2"]
    );
}

#[test]
fn test_select_top_tracks_edge_cases() {
    assert!(select_top_tracks(&create_test_tracks(4), 0).is_empty());
    assert!(select_top_tracks(&[], 5).is_empty());
}

#[test]
fn test_parse_lineup() {
    let contents = "# Friday\nBicep\n\n  Floating Points  \n#Saturday\nJamie xx\n";
    assert_eq!(
        parse_lineup(contents),
        vec!["Bicep", "Floating Points", "Jamie xx"]
    );

    assert!(parse_lineup("").is_empty());
    assert!(parse_lineup("\n  \n# only comments\n").is_empty());
}

#[test]
fn test_failure_report_records_once_in_order() {
    let mut failed = FailureReport::default();
    assert!(failed.is_empty());

    failed.record("Artist B");
    failed.record("Artist A");
    failed.record("Artist B");

    assert_eq!(failed.len(), 2);
    assert_eq!(failed.artists(), ["Artist B", "Artist A"]);
    assert!(failed.contains("Artist A"));
    assert!(!failed.contains("Artist C"));
}

#[test]
fn test_failure_report_serializes_as_list() {
    let mut failed = FailureReport::default();
    failed.record("Artist B");

    assert_eq!(serde_json::to_string(&failed).unwrap(), r#"["Artist B"]"#);
}

#[test]
fn test_report_table_rows() {
    let mut failed = FailureReport::default();
    failed.record("Artist B");

    let report = PlaylistReport {
        playlist: Playlist {
            id: "pl1".to_string(),
            name: "Fest - Unofficial".to_string(),
        },
        artists: vec![
            ArtistResolution {
                artist_name: "Artist A".to_string(),
                artist_id: Some("a1".to_string()),
                track_uris: vec!["spotify:track:t0".to_string(), "spotify:track:t1".to_string()],
            },
            ArtistResolution::unresolved("Artist B"),
        ],
        failed,
    };

    assert_eq!(report.track_count(), 2);

    let rows = report_table_rows(&report);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].artist, "Artist A");
    assert_eq!(rows[0].id, "a1");
    assert_eq!(rows[0].tracks, 2);
    assert_eq!(rows[0].status, "added");
    assert_eq!(rows[1].id, "-");
    assert_eq!(rows[1].tracks, 0);
    assert_eq!(rows[1].status, "failed");
}

#[test]
fn test_playlist_request_from_json() {
    let request = PlaylistRequest::from_json(
        r#"{
            "playlist_name": "Glastonbury",
            "auth_code": "AQD123",
            "number_of_songs_to_add": 3,
            "artist_list": ["Artist A", "Artist B"]
        }"#,
    )
    .unwrap();

    assert_eq!(request.playlist_name, "Glastonbury");
    assert_eq!(request.auth_code, "AQD123");
    assert_eq!(request.number_of_songs_to_add, 3);
    assert_eq!(request.artist_list, vec!["Artist A", "Artist B"]);
}

#[test]
fn test_playlist_request_missing_field() {
    let result = PlaylistRequest::from_json(
        r#"{ "playlist_name": "Glastonbury", "number_of_songs_to_add": 3, "artist_list": [] }"#,
    );
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("auth_code"));
}

#[test]
fn test_playlist_request_wrong_type() {
    // Negative counts are rejected by the type, not by extra validation
    let result = PlaylistRequest::from_json(
        r#"{ "playlist_name": "X", "auth_code": "c", "number_of_songs_to_add": -1, "artist_list": [] }"#,
    );
    assert!(result.is_err());

    let result = PlaylistRequest::from_json(
        r#"{ "playlist_name": "X", "auth_code": "c", "number_of_songs_to_add": 2, "artist_list": "Artist A" }"#,
    );
    assert!(result.is_err());
}
