use reqwest::StatusCode;

use crate::{
    types::{ArtistItem, SearchArtistsResponse, TopTracksResponse, TrackItem},
    utils,
};

use super::SpotifyClient;

/// Raw result of an artist search.
///
/// `items` is `None` when the body could not be parsed as a search result,
/// which is typical for error responses.
#[derive(Debug)]
pub struct ArtistSearch {
    pub status: StatusCode,
    pub items: Option<Vec<ArtistItem>>,
}

impl ArtistSearch {
    /// Any status above 200 counts as a failed search.
    pub fn is_error(&self) -> bool {
        self.status.as_u16() > 200
    }

    /// Id of the first (highest ranked) match.
    pub fn first_id(&self) -> Option<&str> {
        self.items
            .as_ref()
            .and_then(|items| items.first())
            .map(|a| a.id.as_str())
    }
}

impl SpotifyClient {
    /// Searches the catalog for artists matching `artist_name`.
    ///
    /// Only the first page of results is requested.
    ///
    /// # Errors
    ///
    /// Returns a `reqwest::Error` only for transport failures. Error statuses
    /// come back inside [`ArtistSearch`].
    pub async fn search_artist(
        &self,
        token: &str,
        artist_name: &str,
    ) -> Result<ArtistSearch, reqwest::Error> {
        let api_url = format!(
            "{uri}?q={query}&type=artist",
            uri = self.api_url("/search"),
            query = utils::artist_search_query(artist_name)
        );

        let response = self.http.get(&api_url).bearer_auth(token).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let items = serde_json::from_str::<SearchArtistsResponse>(&body)
            .ok()
            .map(|r| r.artists.items);

        Ok(ArtistSearch { status, items })
    }

    /// Fetches an artist's top tracks in catalog order.
    pub async fn top_tracks(
        &self,
        token: &str,
        artist_id: &str,
    ) -> Result<Vec<TrackItem>, reqwest::Error> {
        let mut api_url = self.api_url(&format!("/artists/{}/top-tracks", artist_id));
        if let Some(market) = &self.config.market {
            api_url.push_str(&format!("?market={}", urlencoding::encode(market)));
        }

        let res = self
            .http
            .get(&api_url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json::<TopTracksResponse>()
            .await?;

        Ok(res.tracks)
    }
}
