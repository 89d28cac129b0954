use reqwest::StatusCode;
use serde_json::Value;

use crate::{
    error::LineupError,
    types::{AddTracksToPlaylistRequest, CreatePlaylistRequest, Playlist},
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Creates a public playlist owned by `user_id`.
    ///
    /// The description repeats the name. Nothing checks for an existing
    /// playlist with the same name, so every call creates a new one.
    pub async fn create_playlist(
        &self,
        token: &str,
        user_id: &str,
        name: &str,
    ) -> Result<Playlist, LineupError> {
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: name.to_string(),
            public: true,
        };

        let json: Value = self
            .http
            .post(self.api_url(&format!("/users/{}/playlists", user_id)))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        let id = json["id"].as_str().ok_or(LineupError::MissingField {
            step: "create playlist",
            field: "id",
        })?;

        Ok(Playlist {
            id: id.to_string(),
            name: json["name"].as_str().unwrap_or(name).to_string(),
        })
    }

    /// Appends track URIs to a playlist and returns the response status.
    ///
    /// A non-success status is not turned into an error; callers decide
    /// whether it matters.
    pub async fn add_tracks(
        &self,
        token: &str,
        playlist_id: &str,
        uris: Vec<String>,
    ) -> Result<StatusCode, reqwest::Error> {
        let response = self
            .http
            .post(self.api_url(&format!("/playlists/{}/tracks", playlist_id)))
            .bearer_auth(token)
            .json(&AddTracksToPlaylistRequest { uris })
            .send()
            .await?;

        Ok(response.status())
    }
}
