use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, player::PlayerCountDto},
    server::{error::Error, model::app::AppState, service::ranking::RankingService},
};

pub static STATS_TAG: &str = "stats";

/// Number of ranked players
#[utoipa::path(
    get,
    path = "/api/stats/player-count",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Distinct players with at least one rank", body = PlayerCountDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player_count(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let ranking_service = RankingService::new(&state.db);

    let count = ranking_service.count().await?;

    Ok((StatusCode::OK, Json(PlayerCountDto { count })))
}
