use std::{sync::Arc, time::Duration};

use colored::Colorize;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    config::Config,
    error::LineupError,
    server::{self, AppState, start_api_server},
    types::PendingGrant,
    utils, warning,
};

use super::SpotifyClient;

/// Scope needed to create a public playlist and add tracks to it.
pub const PLAYLIST_SCOPE: &str = "playlist-modify-public";

const CONSENT_TIMEOUT: Duration = Duration::from_secs(120);

impl SpotifyClient {
    /// Exchanges an authorization code for an access token.
    ///
    /// Sends the application credentials as an HTTP Basic credential together
    /// with the code and the configured redirect URI.
    ///
    /// # Errors
    ///
    /// Returns [`LineupError::MissingField`] if the response carries no
    /// `access_token`, which is the case for expired or reused codes.
    pub async fn exchange_code(&self, code: &str) -> Result<String, LineupError> {
        let credentials = &self.config.credentials;
        let response = self
            .http
            .post(self.accounts_url("/api/token"))
            .header(
                AUTHORIZATION,
                utils::basic_credential(&credentials.client_id, &credentials.client_secret),
            )
            .form(&[
                ("code", code),
                ("grant_type", "authorization_code"),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let json: Value = response.json().await?;

        match json["access_token"].as_str() {
            Some(token) => Ok(token.to_string()),
            None => {
                warning!(
                    "Token exchange returned {}: {}",
                    status,
                    json["error_description"]
                        .as_str()
                        .or(json["error"].as_str())
                        .unwrap_or("no error description")
                );
                Err(LineupError::MissingField {
                    step: "token exchange",
                    field: "access_token",
                })
            }
        }
    }

    /// URL the user visits to grant the playlist scope.
    pub fn authorize_url(&self, state: &str) -> String {
        format!(
            "{base}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}&state={state}",
            base = self.accounts_url("/authorize"),
            client_id = urlencoding::encode(&self.config.credentials.client_id),
            redirect_uri = urlencoding::encode(&self.config.redirect_uri),
            scope = urlencoding::encode(PLAYLIST_SCOPE),
            state = state,
        )
    }
}

/// Runs the interactive consent flow and returns the authorization code.
///
/// Starts the local callback server, opens the authorize URL in the default
/// browser and waits until `/callback` delivers a code for the generated
/// `state`.
///
/// # Errors
///
/// Returns [`LineupError::Io`] if the callback address cannot be bound and
/// [`LineupError::Authorization`] if no code arrives within two minutes.
pub async fn request_authorization_code(config: Arc<Config>) -> Result<String, LineupError> {
    let state = utils::generate_state();
    let grant = Arc::new(Mutex::new(Some(PendingGrant {
        state: state.clone(),
        code: None,
    })));

    let listener = server::bind(&config.server_address).await?;
    let server_state = AppState {
        config: Arc::clone(&config),
        grant: Arc::clone(&grant),
    };
    tokio::spawn(async move {
        if let Err(e) = start_api_server(listener, server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    let auth_url = SpotifyClient::new(config).authorize_url(&state);
    if webbrowser::open(&auth_url).is_err() {
        // stdout may carry the JSON report
        eprintln!(
            "[{}] Failed to open browser. Please navigate to the following URL manually:\n{}",
            "!".yellow().bold(),
            auth_url
        );
    }

    wait_for_code(grant, CONSENT_TIMEOUT)
        .await
        .ok_or_else(|| LineupError::Authorization("no authorization code received".to_string()))
}

/// Polls the shared grant until the callback stores a code or the timeout
/// elapses.
pub async fn wait_for_code(
    grant: Arc<Mutex<Option<PendingGrant>>>,
    max_wait: Duration,
) -> Option<String> {
    let start = tokio::time::Instant::now();

    while start.elapsed() < max_wait {
        {
            let lock = grant.lock().await;
            if let Some(code) = lock.as_ref().and_then(|g| g.code.clone()) {
                return Some(code);
            }
        }
        tokio::time::sleep(Duration::from_millis(250)).await;
    }

    None
}
