//! Configuration management for lineuptunes.
//!
//! Configuration is read once at startup from environment variables and
//! `.env` files and then handed to the builder as an explicit [`Config`].
//! Nothing below the binary reads process environment ad hoc.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory
//! 4. Defaults (where applicable)

use std::{env, path::PathBuf};

use crate::error::LineupError;

pub const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:9000/callback";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:9000";

/// Loads environment variables from `.env` files.
///
/// The data directory file lives at:
/// - Linux: `~/.local/share/lineuptunes/.env`
/// - macOS: `~/Library/Application Support/lineuptunes/.env`
/// - Windows: `%LOCALAPPDATA%/lineuptunes/.env`
///
/// Missing files are not an error; variables may come from the process
/// environment alone. Variables that are already set are never overwritten.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lineuptunes/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::dotenv().ok();
    dotenv::from_path(path).ok();
    Ok(())
}

/// Spotify application credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Base URLs of the two Spotify hosts.
///
/// `accounts_url` serves `/authorize` and `/api/token`; `api_url` is the Web
/// API root including the version segment.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub accounts_url: String,
    pub api_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            accounts_url: DEFAULT_ACCOUNTS_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub endpoints: Endpoints,
    pub redirect_uri: String,
    pub server_address: String,
    /// Market passed to the top-tracks endpoint, if any.
    pub market: Option<String>,
}

impl Config {
    /// Builds a configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`LineupError::MissingConfig`] when `CLIENT_ID` or
    /// `CLIENT_SECRET` is unset or empty.
    pub fn from_env() -> Result<Self, LineupError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, LineupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(LineupError::MissingConfig(key));

        Ok(Self {
            credentials: Credentials {
                client_id: require("CLIENT_ID")?,
                client_secret: require("CLIENT_SECRET")?,
            },
            endpoints: Endpoints {
                accounts_url: trim_base(get("SPOTIFY_ACCOUNTS_URL"), DEFAULT_ACCOUNTS_URL),
                api_url: trim_base(get("SPOTIFY_API_URL"), DEFAULT_API_URL),
            },
            redirect_uri: get("SPOTIFY_REDIRECT_URI")
                .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string()),
            server_address: get("SERVER_ADDRESS")
                .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            market: get("SPOTIFY_MARKET"),
        })
    }

    /// Creates a configuration with default endpoints for the given credentials.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials {
                client_id: client_id.into(),
                client_secret: client_secret.into(),
            },
            endpoints: Endpoints::default(),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            market: None,
        }
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }
}

fn trim_base(value: Option<String>, default: &str) -> String {
    value
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}
