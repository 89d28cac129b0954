use axum::{Extension, http::StatusCode, response::Json};
use serde_json::{Value, json};

use crate::{
    builder::PlaylistBuilder,
    server::AppState,
    success,
    types::{PlaylistReport, PlaylistRequest},
    warning,
};

/// Builds a playlist from a JSON lineup request.
///
/// Malformed bodies are rejected by the `Json` extractor before the builder
/// runs. Setup failures answer with `502 Bad Gateway`; per-artist failures
/// are part of the successful report.
pub async fn playlist(
    Extension(app): Extension<AppState>,
    Json(request): Json<PlaylistRequest>,
) -> Result<Json<PlaylistReport>, (StatusCode, Json<Value>)> {
    let builder = PlaylistBuilder::from_shared(app.config);

    match builder.run(&request).await {
        Ok(report) => {
            success!(
                "Playlist {} built with {} tracks",
                report.playlist.name,
                report.track_count()
            );
            Ok(Json(report))
        }
        Err(e) => {
            warning!("Playlist build failed: {}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": e.to_string() })),
            ))
        }
    }
}
