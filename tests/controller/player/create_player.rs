//! Tests for the create_player endpoint.

use axum::{extract::rejection::JsonRejection, Json};
use melontier::{
    model::{
        api::ErrorDto,
        player::CreatePlayerDto,
        tier::{CombatTitle, GameMode, Region, TierLevel},
    },
    server::controller::player::create_player,
};

use super::*;

fn payload(id: &str, username: &str) -> CreatePlayerDto {
    CreatePlayerDto {
        id: id.to_string(),
        username: username.to_string(),
        minecraft_uuid: None,
        region: Some(Region::Eu),
        tiers: [
            (GameMode::Pot, Some(TierLevel::Ht1)),
            (GameMode::Sword, Some(TierLevel::Lt3)),
        ]
        .into_iter()
        .collect(),
    }
}

/// Tests creating a player.
///
/// Expected: 201 Created with points and title computed from the tiers
#[tokio::test]
async fn creates_player() -> Result<(), TestError> {
    let test = TestBuilder::new().with_rank_tables().build().await?;

    let body: Result<Json<CreatePlayerDto>, JsonRejection> = Ok(Json(payload("10", "Kylaz")));
    let resp = create_player(State(test.into_app_state()), body)
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let player: PlayerDto = json_body(resp).await;
    assert_eq!(player.id, "10");
    assert_eq!(player.region, Some(Region::Eu));
    assert_eq!(player.total_points, 66);
    assert_eq!(player.combat_title, CombatTitle::Ace);

    Ok(())
}

/// Tests creating a player with an invalid username.
///
/// Expected: 400 Bad Request with an error message
#[tokio::test]
async fn rejects_invalid_username() -> Result<(), TestError> {
    let test = TestBuilder::new().with_rank_tables().build().await?;

    let body: Result<Json<CreatePlayerDto>, JsonRejection> =
        Ok(Json(payload("10", "ThisNameIsWayTooLong")));
    let result = create_player(State(test.into_app_state()), body).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert!(body.error.contains("username"));

    Ok(())
}
