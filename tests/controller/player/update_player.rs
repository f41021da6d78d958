//! Tests for the update_player endpoint.

use axum::{extract::rejection::JsonRejection, Json};
use melontier::{
    model::{
        player::UpdatePlayerDto,
        tier::{GameMode, TierLevel},
    },
    server::controller::player::update_player,
};

use super::*;

/// Tests updating a player's tiers.
///
/// Expected: 200 OK with recomputed points
#[tokio::test]
async fn updates_player() -> Result<(), TestError> {
    let test = seeded().await?;

    let payload = UpdatePlayerDto {
        tiers: Some([(GameMode::Mace, Some(TierLevel::Lt1))].into_iter().collect()),
        ..Default::default()
    };
    let body: Result<Json<UpdatePlayerDto>, JsonRejection> = Ok(Json(payload));
    let resp = update_player(State(test.into_app_state()), Path("3".to_string()), body)
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let player: PlayerDto = json_body(resp).await;
    assert_eq!(player.total_points, 51);
    assert_eq!(player.tier_level(GameMode::Mace), Some(TierLevel::Lt1));

    Ok(())
}

/// Tests updating an unknown player.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn returns_not_found_for_unknown_player() -> Result<(), TestError> {
    let test = seeded().await?;

    let body: Result<Json<UpdatePlayerDto>, JsonRejection> = Ok(Json(UpdatePlayerDto::default()));
    let result = update_player(State(test.into_app_state()), Path("404".to_string()), body).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
