use std::{fmt, io};

/// Errors that abort a playlist build or prevent one from starting.
///
/// Per-artist problems are not errors; they end up in the
/// [`FailureReport`](crate::types::FailureReport) instead.
#[derive(Debug)]
pub enum LineupError {
    /// A required configuration variable is not set.
    MissingConfig(&'static str),
    /// A setup response did not contain the field the next step needs.
    MissingField {
        step: &'static str,
        field: &'static str,
    },
    Http(reqwest::Error),
    Io(io::Error),
    Json(serde_json::Error),
    /// The consent flow did not produce an authorization code.
    Authorization(String),
}

impl fmt::Display for LineupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineupError::MissingConfig(key) => write!(f, "{} must be set", key),
            LineupError::MissingField { step, field } => {
                write!(f, "{} response has no `{}` field", step, field)
            }
            LineupError::Http(e) => write!(f, "HTTP request failed: {}", e),
            LineupError::Io(e) => write!(f, "IO error: {}", e),
            LineupError::Json(e) => write!(f, "invalid JSON: {}", e),
            LineupError::Authorization(msg) => write!(f, "authorization failed: {}", msg),
        }
    }
}

impl std::error::Error for LineupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LineupError::Http(e) => Some(e),
            LineupError::Io(e) => Some(e),
            LineupError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LineupError {
    fn from(err: reqwest::Error) -> Self {
        LineupError::Http(err)
    }
}

impl From<io::Error> for LineupError {
    fn from(err: io::Error) -> Self {
        LineupError::Io(err)
    }
}

impl From<serde_json::Error> for LineupError {
    fn from(err: serde_json::Error) -> Self {
        LineupError::Json(err)
    }
}
