//! Tests for PlayerRankRepository::count_players method.

use super::*;

/// Tests counting players rather than rows.
///
/// Verifies a player with several rank rows is counted once.
///
/// Expected: Ok(2) for 2 players holding 4 rows
#[tokio::test]
async fn counts_distinct_players() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_rank_tables()
        .with_player("1", "Marlowww", None, &[("sword", "HT1"), ("axe", "LT2"), ("pot", "HT3")])
        .with_player("2", "Swight", None, &[("sword", "LT1")])
        .build()
        .await?;

    let repo = PlayerRankRepository::new(&test.db);
    let count = repo.count_players().await?;

    assert_eq!(count, 2);

    Ok(())
}

/// Tests counting an empty table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().with_rank_tables().build().await?;

    let repo = PlayerRankRepository::new(&test.db);
    let count = repo.count_players().await?;

    assert_eq!(count, 0);

    Ok(())
}
