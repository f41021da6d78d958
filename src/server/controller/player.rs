use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        player::{CreatePlayerDto, PlayerDto, UpdatePlayerDto},
    },
    server::{
        error::{player::PlayerError, Error},
        model::app::AppState,
        service::{player::PlayerService, ranking::RankingService},
    },
};

pub static PLAYER_TAG: &str = "player";

/// Search players by username
///
/// Case-insensitive substring match. A blank query returns an empty list.
#[utoipa::path(
    get,
    path = "/api/players/search/{query}",
    tag = PLAYER_TAG,
    params(
        ("query" = String, Path, description = "Part of a Minecraft username")
    ),
    responses(
        (status = 200, description = "Matching players, highest total first", body = Vec<PlayerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_players(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let ranking_service = RankingService::new(&state.db);

    let players = ranking_service.search(&query).await?;

    Ok((StatusCode::OK, Json(players)))
}

/// Get a player's profile
#[utoipa::path(
    get,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = String, Path, description = "Player identity (Discord ID)")
    ),
    responses(
        (status = 200, description = "Aggregated player", body = PlayerDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let ranking_service = RankingService::new(&state.db);

    let player = ranking_service
        .get_by_id(&id)
        .await?
        .ok_or(PlayerError::NotFound(id))?;

    Ok((StatusCode::OK, Json(player)))
}

/// Create a player or replace all of an existing player's tiers
#[utoipa::path(
    post,
    path = "/api/players",
    tag = PLAYER_TAG,
    request_body = CreatePlayerDto,
    responses(
        (status = 201, description = "Player created", body = PlayerDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_player(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlayerDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let player_service = PlayerService::new(&state.db);

    let Json(payload) = payload.map_err(|e| PlayerError::InvalidPayload(e.body_text()))?;
    let player = player_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(player)))
}

/// Partially update a player
///
/// Absent fields are left unchanged, each entry of `tiers` replaces that game mode's tier.
#[utoipa::path(
    patch,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = String, Path, description = "Player identity (Discord ID)")
    ),
    request_body = UpdatePlayerDto,
    responses(
        (status = 200, description = "Updated player", body = PlayerDto),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePlayerDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let player_service = PlayerService::new(&state.db);

    let Json(payload) = payload.map_err(|e| PlayerError::InvalidPayload(e.body_text()))?;
    let player = player_service
        .update(&id, payload)
        .await?
        .ok_or(PlayerError::NotFound(id))?;

    Ok((StatusCode::OK, Json(player)))
}
