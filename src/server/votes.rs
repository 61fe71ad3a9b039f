use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::app::App;

use super::error::AppError;

#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub choice: i64,
}

#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub success: bool,
}

/// POST /api/vote
pub async fn submit_vote(
    State(app): State<App>,
    payload: Result<Json<VoteRequest>, JsonRejection>,
) -> Result<Json<VoteResponse>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    // The append is file I/O; keep it and the ballot lock off the runtime.
    let written = tokio::task::spawn_blocking(move || {
        let mut ballot = app.ballot();
        ballot.submit(app.store.as_ref(), req.choice)
    })
    .await
    .map_err(|e| AppError::Internal(format!("vote task failed: {e}")))?;
    written?;

    Ok(Json(VoteResponse { success: true }))
}
