//! Festival Lineup Playlist Builder Library
//!
//! This library turns a festival lineup into a Spotify playlist. Given an
//! authorization code, a list of artist names and a per-artist track count, it
//! exchanges the code for an access token, creates a playlist for the current
//! user, resolves every artist through the search endpoint and appends each
//! artist's top tracks.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local callback and invocation server
//! - `builder` - The playlist building pipeline
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Library error type
//! - `server` - Local HTTP server wiring
//! - `spotify` - Thin Spotify Web API client
//! - `types` - Request, response and report data structures
//! - `utils` - Small pure helpers
//!
//! # Example
//!
//! ```
//! use lineuptunes::{builder::PlaylistBuilder, config, types::PlaylistRequest};
//!
//! #[tokio::main]
//! async fn main() -> lineuptunes::Res<()> {
//!     config::load_env().await?;
//!     let builder = PlaylistBuilder::new(config::Config::from_env()?);
//!     let request = PlaylistRequest::from_json(r#"{ ... }"#)?;
//!     let report = builder.run(&request).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for the binary and CLI glue.
///
/// Library operations return [`error::LineupError`]; this alias boxes any
/// error so command handlers can mix configuration, IO and request failures
/// with `?`.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Writes one line to stdout with a blue "o" marker in front of the message.
/// Used for progress and status updates.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Creating playlist {}", name);
/// info!("Looking up {} artists", lineup.len());
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Arguments
///
/// Same as `println!`.
///
/// # Example
///
/// ```
/// success!("Created playlist {} ({})", playlist.name, playlist.id);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only the binary uses this. Library code returns errors instead so that
/// the invocation server keeps running after a failed request.
///
/// # Arguments
///
/// Same as `println!`. The process exits with status 1 after printing.
///
/// # Example
///
/// ```
/// error!("Cannot load configuration. Err: {}", e);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for per-artist failures and other recoverable issues that are
/// reported but never abort a run.
///
/// # Arguments
///
/// Same as `println!`.
///
/// # Example
///
/// ```
/// warning!("Bad artist search: {}", failed.join(", "));
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
