//! Tests for the get_player_count endpoint.

use melontier::{model::player::PlayerCountDto, server::controller::stats::get_player_count};

use super::*;

/// Tests counting distinct players.
///
/// Expected: 200 OK with a count of 3
#[tokio::test]
async fn counts_players() -> Result<(), TestError> {
    let test = seeded().await?;

    let resp = get_player_count(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: PlayerCountDto = json_body(resp).await;
    assert_eq!(body.count, 3);

    Ok(())
}

/// Tests counting when no players exist.
///
/// Expected: 200 OK with a count of 0
#[tokio::test]
async fn counts_zero_without_players() -> Result<(), TestError> {
    let test = TestBuilder::new().with_rank_tables().build().await?;

    let resp = get_player_count(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();

    let body: PlayerCountDto = json_body(resp).await;
    assert_eq!(body.count, 0);

    Ok(())
}
