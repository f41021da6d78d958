//! Tests for the get_rankings_by_mode endpoint.

use melontier::{
    model::api::InvalidGameModeDto, server::controller::ranking::get_rankings_by_mode,
};

use super::*;

/// Tests a game mode leaderboard.
///
/// Verifies only players holding a sword tier are listed, ordered by their sword tier with ties
/// broken by identity.
///
/// Expected: 200 OK with players 2, 1, 3
#[tokio::test]
async fn returns_players_ranked_in_mode() -> Result<(), TestError> {
    let test = seeded().await?;

    let resp = get_rankings_by_mode(State(test.into_app_state()), Path("sword".to_string()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let players: Vec<PlayerDto> = json_body(resp).await;
    let ids: Vec<&str> = players.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1", "3"]);

    Ok(())
}

/// Tests `overall` through the game mode endpoint.
///
/// Expected: 200 OK with every player
#[tokio::test]
async fn accepts_overall() -> Result<(), TestError> {
    let test = seeded().await?;

    let resp = get_rankings_by_mode(State(test.into_app_state()), Path("overall".to_string()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let players: Vec<PlayerDto> = json_body(resp).await;
    assert_eq!(players.len(), 3);

    Ok(())
}

/// Tests an unknown game mode.
///
/// Expected: 400 Bad Request listing the valid modes
#[tokio::test]
async fn rejects_unknown_mode() -> Result<(), TestError> {
    let test = seeded().await?;

    let result =
        get_rankings_by_mode(State(test.into_app_state()), Path("vanilla".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: InvalidGameModeDto = json_body(resp).await;
    assert_eq!(body.error, "Invalid game mode");
    assert!(body.valid_modes.contains(&"overall".to_string()));
    assert!(body.valid_modes.contains(&"sword".to_string()));

    Ok(())
}
