use serde_json::Value;

use crate::error::LineupError;

use super::SpotifyClient;

impl SpotifyClient {
    /// Returns the id of the user the access token belongs to.
    pub async fn current_user_id(&self, token: &str) -> Result<String, LineupError> {
        let json: Value = self
            .http
            .get(self.api_url("/me"))
            .bearer_auth(token)
            .send()
            .await?
            .json()
            .await?;

        json["id"]
            .as_str()
            .map(String::from)
            .ok_or(LineupError::MissingField {
                step: "current user",
                field: "id",
            })
    }
}
