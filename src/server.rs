use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{api, config::Config, error::LineupError, types::PendingGrant};

/// State shared by the HTTP handlers.
///
/// `grant` holds the consent flow waiting for a callback, if one is running.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub grant: Arc<Mutex<Option<PendingGrant>>>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback))
        .route("/playlist", post(api::playlist))
        .layer(Extension(state))
}

/// Binds the listener for the API server.
///
/// # Errors
///
/// Returns [`LineupError::Io`] if `address` is not a socket address or the
/// port cannot be bound.
pub async fn bind(address: &str) -> Result<TcpListener, LineupError> {
    let addr = SocketAddr::from_str(address).map_err(|e| {
        LineupError::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
    })?;

    Ok(TcpListener::bind(&addr).await?)
}

pub async fn start_api_server(listener: TcpListener, state: AppState) -> Result<(), LineupError> {
    axum::serve(listener, router(state)).await?;
    Ok(())
}
