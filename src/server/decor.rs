use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use crate::app::App;
use crate::layout::{self, HeartPlacement};
use crate::plan;

const MAX_HEARTS: usize = 200;

#[derive(Debug, Deserialize)]
pub struct HeartsQuery {
    pub seed: Option<u32>,
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct HeartsResponse {
    pub seed: u32,
    pub hearts: Vec<HeartPlacement>,
}

/// GET /api/hearts?seed=&count=
pub async fn hearts(State(app): State<App>, Query(q): Query<HeartsQuery>) -> Json<HeartsResponse> {
    let seed = q.seed.unwrap_or(app.settings.layout.seed);
    let count = q.count.unwrap_or(app.settings.layout.count).min(MAX_HEARTS);
    Json(HeartsResponse {
        seed,
        hearts: layout::hearts(seed, count),
    })
}

#[derive(Debug, Serialize)]
pub struct PenaltyResponse {
    pub penalty: Option<String>,
}

/// GET /api/penalty
pub async fn penalty(State(app): State<App>) -> Json<PenaltyResponse> {
    let mut rng = rand::rng();
    let penalty = plan::pick_penalty(&app.settings.plan.penalties, &mut rng).map(str::to_string);
    Json(PenaltyResponse { penalty })
}
