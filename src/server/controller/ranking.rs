use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, InvalidGameModeDto},
        player::{GameModeDto, PlayerDto},
        tier::GameMode,
    },
    server::{
        error::{ranking::RankingError, Error},
        model::app::AppState,
        service::ranking::RankingService,
    },
};

pub static RANKING_TAG: &str = "ranking";

/// Overall leaderboard, every player by total points
#[utoipa::path(
    get,
    path = "/api/rankings",
    tag = RANKING_TAG,
    responses(
        (status = 200, description = "Players sorted by total points, highest first", body = Vec<PlayerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rankings(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let ranking_service = RankingService::new(&state.db);

    let players = ranking_service.get_by_mode(GameMode::Overall).await?;

    Ok((StatusCode::OK, Json(players)))
}

/// Leaderboard of a single game mode
///
/// `overall` behaves like `/api/rankings`. Any other mode lists only players holding a tier in
/// it, sorted by that tier.
#[utoipa::path(
    get,
    path = "/api/rankings/{mode}",
    tag = RANKING_TAG,
    params(
        ("mode" = String, Path, description = "Game mode identifier, e.g. `sword` or `overall`")
    ),
    responses(
        (status = 200, description = "Players ranked in the game mode", body = Vec<PlayerDto>),
        (status = 400, description = "Unknown game mode", body = InvalidGameModeDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rankings_by_mode(
    State(state): State<AppState>,
    Path(mode): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let ranking_service = RankingService::new(&state.db);

    let mode = GameMode::from_id(&mode).ok_or_else(|| RankingError::InvalidGameMode(mode.clone()))?;
    let players = ranking_service.get_by_mode(mode).await?;

    Ok((StatusCode::OK, Json(players)))
}

/// Game modes players can be ranked in
#[utoipa::path(
    get,
    path = "/api/gamemodes",
    tag = RANKING_TAG,
    responses(
        (status = 200, description = "Ranked game modes in display order", body = Vec<GameModeDto>)
    ),
)]
pub async fn get_game_modes(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let ranking_service = RankingService::new(&state.db);

    Ok((StatusCode::OK, Json(ranking_service.game_modes())))
}
