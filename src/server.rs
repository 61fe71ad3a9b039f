//! HTTP surface: catalog, player commands, votes and decorative layout.

mod catalog;
mod decor;
mod error;
mod player;
mod votes;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::App;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the application router.
///
/// The audio directory is served under `/<public_prefix>` so catalog
/// `src` paths resolve against this same server.
pub fn build_router(app: App) -> Router {
    let prefix = format!("/{}", app.settings.library.public_prefix.trim_matches('/'));
    let audio = ServeDir::new(&app.settings.library.dir);

    let api = Router::new()
        .route("/api/musics", get(catalog::list_tracks))
        .route("/api/vote", post(votes::submit_vote))
        .route("/api/hearts", get(decor::hearts))
        .route("/api/penalty", get(decor::penalty))
        .route("/api/player", get(player::state))
        .route("/api/player/toggle", post(player::toggle))
        .route("/api/player/next", post(player::next))
        .route("/api/player/prev", post(player::prev))
        .route("/api/player/select", post(player::select))
        .route("/api/player/ended", post(player::ended))
        .route("/api/player/shuffle", post(player::shuffle))
        .route("/api/player/repeat", post(player::repeat))
        .route("/api/player/reload", post(player::reload))
        .route("/health", get(health_check));

    api.nest_service(&prefix, audio)
        .with_state(app)
        .layer(TraceLayer::new_for_http())
}
