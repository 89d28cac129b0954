//! # API Module
//!
//! HTTP endpoints of the local server.
//!
//! - [`callback`] - Receives the redirect from Spotify's authorize page. While
//!   the CLI consent flow is waiting, the code is handed to it; otherwise the
//!   code is shown so it can be used in a `/playlist` request.
//! - [`playlist`] - Accepts a lineup request as JSON, builds the playlist and
//!   answers with the report.
//! - [`health`] - Returns status and version for monitoring.
//!
//! Handlers get the shared [`AppState`](crate::server::AppState) through an
//! axum `Extension`.

mod callback;
mod health;
mod playlist;

pub use callback::callback;
pub use health::health;
pub use playlist::playlist;
