//! Tests for the get_rankings endpoint.

use melontier::server::controller::ranking::get_rankings;

use super::*;

/// Tests the overall leaderboard ordering.
///
/// Expected: 200 OK with players ordered by total points
#[tokio::test]
async fn returns_players_by_total_points() -> Result<(), TestError> {
    let test = seeded().await?;

    let result = get_rankings(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let players: Vec<PlayerDto> = json_body(resp).await;
    let totals: Vec<(String, u32)> = players
        .into_iter()
        .map(|p| (p.id, p.total_points))
        .collect();
    assert_eq!(
        totals,
        vec![
            ("2".to_string(), 90),
            ("1".to_string(), 66),
            ("3".to_string(), 6)
        ]
    );

    Ok(())
}

/// Tests the overall leaderboard of an empty table.
///
/// Expected: 200 OK with an empty list
#[tokio::test]
async fn returns_empty_list_without_players() -> Result<(), TestError> {
    let test = TestBuilder::new().with_rank_tables().build().await?;

    let resp = get_rankings(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let players: Vec<PlayerDto> = json_body(resp).await;
    assert!(players.is_empty());

    Ok(())
}

/// Tests error handling when the database fails.
///
/// Expected: 500 Internal Server Error
#[tokio::test]
async fn returns_internal_error_on_database_failure() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_rankings(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
