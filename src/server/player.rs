//! Player commands. Each one applies a controller transition and answers
//! with the resulting snapshot.
//!
//! Commands that come from a click count as a user gesture and unlock the
//! deck; `ended` is reported by the element itself and does not.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;
use tracing::{info, warn};

use crate::app::{App, Player};
use crate::playback::PlaybackSnapshot;

use super::error::AppError;

fn gesture(app: &App, f: impl FnOnce(&mut Player)) -> Json<PlaybackSnapshot> {
    let mut player = app.player();
    player.element_mut().unlock();
    f(&mut *player);
    Json(player.snapshot())
}

/// GET /api/player
pub async fn state(State(app): State<App>) -> Json<PlaybackSnapshot> {
    Json(app.player().snapshot())
}

/// POST /api/player/toggle
pub async fn toggle(State(app): State<App>) -> Json<PlaybackSnapshot> {
    gesture(&app, |p| p.toggle_play())
}

/// POST /api/player/next
pub async fn next(State(app): State<App>) -> Json<PlaybackSnapshot> {
    gesture(&app, |p| {
        p.next();
    })
}

/// POST /api/player/prev
pub async fn prev(State(app): State<App>) -> Json<PlaybackSnapshot> {
    gesture(&app, |p| {
        p.prev();
    })
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub index: usize,
}

/// POST /api/player/select `{ "index": n }`
pub async fn select(
    State(app): State<App>,
    payload: Result<Json<SelectRequest>, JsonRejection>,
) -> Result<Json<PlaybackSnapshot>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(gesture(&app, |p| {
        p.select(req.index);
    }))
}

/// POST /api/player/ended
pub async fn ended(State(app): State<App>) -> Json<PlaybackSnapshot> {
    let mut player = app.player();
    player.on_track_end();
    Json(player.snapshot())
}

#[derive(Debug, Deserialize)]
pub struct ShuffleRequest {
    pub enabled: bool,
}

/// POST /api/player/shuffle `{ "enabled": bool }`
pub async fn shuffle(
    State(app): State<App>,
    payload: Result<Json<ShuffleRequest>, JsonRejection>,
) -> Result<Json<PlaybackSnapshot>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(gesture(&app, |p| p.set_shuffle(req.enabled)))
}

/// POST /api/player/repeat
pub async fn repeat(State(app): State<App>) -> Json<PlaybackSnapshot> {
    gesture(&app, |p| {
        p.cycle_repeat_mode();
    })
}

/// POST /api/player/reload
pub async fn reload(State(app): State<App>) -> Json<PlaybackSnapshot> {
    let scan_app = app.clone();
    let tracks = tokio::task::spawn_blocking(move || scan_app.scan_catalog())
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, "catalog scan task failed");
            Vec::new()
        });
    info!(count = tracks.len(), "player catalog reloaded");

    let mut player = app.player();
    player.load(tracks);
    Json(player.snapshot())
}
