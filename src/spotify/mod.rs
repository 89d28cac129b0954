//! # Spotify Integration Module
//!
//! A thin wrapper around the handful of Spotify Web API endpoints the
//! playlist builder needs. Each submodule adds methods to [`SpotifyClient`]
//! for one area of the API:
//!
//! ```text
//! PlaylistBuilder
//!      ↓
//! SpotifyClient
//!     ├── auth      POST /api/token, GET /authorize (consent flow)
//!     ├── user      GET  /me
//!     ├── playlist  POST /users/{id}/playlists, POST /playlists/{id}/tracks
//!     └── artists   GET  /search, GET /artists/{id}/top-tracks
//!      ↓
//! reqwest
//! ```
//!
//! ## Error Handling
//!
//! The client does not retry and does not handle rate limits. Setup calls
//! (token, user, playlist) turn a missing identifier into
//! [`LineupError::MissingField`](crate::error::LineupError::MissingField).
//! Artist calls hand the HTTP status back to the caller so that the builder
//! decides what counts as a per-artist failure.
//!
//! ## Endpoints
//!
//! Base URLs come from [`Endpoints`](crate::config::Endpoints), which lets the
//! integration tests point the client at a local mock server.

pub mod artists;
pub mod auth;
pub mod playlist;
pub mod user;

use std::sync::Arc;

use reqwest::Client;

use crate::config::Config;

/// Shared HTTP client plus the configuration it talks to.
///
/// Cloning is cheap: the reqwest client and the configuration are both
/// reference counted, so a clone can be moved into a spawned task.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    config: Arc<Config>,
}

impl SpotifyClient {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.endpoints.api_url, path)
    }

    fn accounts_url(&self, path: &str) -> String {
        format!("{}{}", self.config.endpoints.accounts_url, path)
    }
}
