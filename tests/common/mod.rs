//! Mock Spotify endpoints shared by the integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{Value, json};

use lineuptunes::config::{Config, Endpoints};
use lineuptunes::types::PlaylistRequest;

pub const TOKEN: &str = "test-access-token";
pub const USER_ID: &str = "festival-goer";
pub const PLAYLIST_ID: &str = "pl0001";

// Configuration pointing both Spotify hosts at the mock server
pub fn test_config(server: &ServerGuard) -> Config {
    Config::new("id", "secret").with_endpoints(Endpoints {
        accounts_url: server.url(),
        api_url: format!("{}/v1", server.url()),
    })
}

pub fn test_request(artists: &[&str], songs: usize) -> PlaylistRequest {
    PlaylistRequest {
        playlist_name: "Fest".to_string(),
        auth_code: "auth-code".to_string(),
        number_of_songs_to_add: songs,
        artist_list: artists.iter().map(|a| a.to_string()).collect(),
    }
}

pub async fn mock_token(server: &mut ServerGuard, body: Value, hits: usize) -> Mock {
    server
        .mock("POST", "/api/token")
        .match_header("authorization", "Basic aWQ6c2VjcmV0")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("code".into(), "auth-code".into()),
            Matcher::UrlEncoded("grant_type".into(), "authorization_code".into()),
            Matcher::UrlEncoded(
                "redirect_uri".into(),
                "http://localhost:9000/callback".into(),
            ),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(hits)
        .create_async()
        .await
}

pub async fn mock_me(server: &mut ServerGuard, body: Value, hits: usize) -> Mock {
    server
        .mock("GET", "/v1/me")
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(hits)
        .create_async()
        .await
}

pub async fn mock_create_playlist(server: &mut ServerGuard, body: Value, hits: usize) -> Mock {
    server
        .mock("POST", format!("/v1/users/{}/playlists", USER_ID).as_str())
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .match_body(Matcher::Json(json!({
            "name": "Fest - Unofficial",
            "description": "Fest - Unofficial",
            "public": true
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(hits)
        .create_async()
        .await
}

// Token exchange, user lookup and playlist creation all succeeding once
pub async fn mock_setup(server: &mut ServerGuard) -> Vec<Mock> {
    vec![
        mock_token(server, json!({ "access_token": TOKEN, "expires_in": 3600 }), 1).await,
        mock_me(server, json!({ "id": USER_ID }), 1).await,
        mock_create_playlist(
            server,
            json!({ "id": PLAYLIST_ID, "name": "Fest - Unofficial" }),
            1,
        )
        .await,
    ]
}

pub async fn mock_search(
    server: &mut ServerGuard,
    artist: &str,
    status: usize,
    artist_ids: &[&str],
    hits: usize,
) -> Mock {
    let items: Vec<Value> = artist_ids
        .iter()
        .map(|id| json!({ "id": id, "name": artist }))
        .collect();

    server
        .mock("GET", Matcher::Regex(r"^/v1/search".to_string()))
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), format!("artist:{}", artist)),
            Matcher::UrlEncoded("type".into(), "artist".into()),
        ]))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(json!({ "artists": { "items": items } }).to_string())
        .expect(hits)
        .create_async()
        .await
}

pub async fn mock_top_tracks(server: &mut ServerGuard, artist_id: &str, count: usize, hits: usize) -> Mock {
    let tracks: Vec<Value> = (0..count)
        .map(|i| json!({ "id": format!("{}-t{}", artist_id, i), "name": format!("Track {}", i) }))
        .collect();

    server
        .mock("GET", format!("/v1/artists/{}/top-tracks", artist_id).as_str())
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .with_header("content-type", "application/json")
        .with_body(json!({ "tracks": tracks }).to_string())
        .expect(hits)
        .create_async()
        .await
}

pub async fn mock_append(server: &mut ServerGuard, uris: &[&str], hits: usize) -> Mock {
    server
        .mock("POST", format!("/v1/playlists/{}/tracks", PLAYLIST_ID).as_str())
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .match_body(Matcher::Json(json!({ "uris": uris })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"snapshot_id":"snap"}"#)
        .expect(hits)
        .create_async()
        .await
}

pub async fn assert_all(mocks: &[Mock]) {
    for mock in mocks {
        mock.assert_async().await;
    }
}

// Accepts every append and keeps the submitted URIs in arrival order
pub async fn record_appends(
    server: &mut ServerGuard,
    hits: usize,
) -> (Mock, Arc<Mutex<Vec<Vec<String>>>>) {
    let appends: Arc<Mutex<Vec<Vec<String>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&appends);

    let mock = server
        .mock("POST", format!("/v1/playlists/{}/tracks", PLAYLIST_ID).as_str())
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body_from_request(move |request| {
            let uris: Vec<String> = request
                .body()
                .ok()
                .and_then(|body| serde_json::from_slice::<Value>(body).ok())
                .and_then(|json| json["uris"].as_array().cloned())
                .unwrap_or_default()
                .iter()
                .filter_map(|u| u.as_str().map(String::from))
                .collect();
            sink.lock().unwrap().push(uris);
            br#"{"snapshot_id":"snap"}"#.to_vec()
        })
        .expect(hits)
        .create_async()
        .await;

    (mock, appends)
}
