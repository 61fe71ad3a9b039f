use axum::Json;
use axum::extract::State;

use crate::app::App;
use crate::library::Catalog;

/// GET /api/musics
///
/// Always 200; an unreadable directory lists as `{ "tracks": [] }`.
pub async fn list_tracks(State(app): State<App>) -> Json<Catalog> {
    let tracks = tokio::task::spawn_blocking(move || app.scan_catalog())
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "catalog scan task failed");
            Vec::new()
        });
    Json(Catalog::new(tracks))
}
