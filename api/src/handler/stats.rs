use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::stats::StatsResponse;

#[utoipa::path(
    get,
    path = "/api/stats",
    responses((status = 200, description = "Library totals", body = StatsResponse))
)]
pub async fn show_stats(State(registry): State<AppRegistry>) -> AppResult<Json<StatsResponse>> {
    registry
        .stats_repository()
        .summarize()
        .await
        .map(|stats| Json(stats.into()))
}
