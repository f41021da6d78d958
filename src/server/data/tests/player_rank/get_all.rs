//! Tests for PlayerRankRepository::get_all method.

use super::*;

/// Tests reading rows in insertion order.
///
/// Verifies rows of different players come back ordered by row ID rather than grouped by player.
///
/// Expected: Ok with rows ordered by ID
#[tokio::test]
async fn returns_rows_in_storage_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_rank_tables()
        .with_rank("2", "Swight", "sword", Some("HT1"))
        .with_rank("1", "Marlowww", "pot", Some("LT2"))
        .with_rank("2", "Swight", "axe", Some("LT3"))
        .build()
        .await?;

    let repo = PlayerRankRepository::new(&test.db);
    let rows = repo.get_all().await?;

    let keys: Vec<(&str, &str)> = rows
        .iter()
        .map(|row| (row.discord_id.as_str(), row.gamemode.as_str()))
        .collect();
    assert_eq!(keys, vec![("2", "sword"), ("1", "pot"), ("2", "axe")]);

    Ok(())
}

/// Tests reading an empty table.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_when_no_rows() -> Result<(), TestError> {
    let test = TestBuilder::new().with_rank_tables().build().await?;

    let repo = PlayerRankRepository::new(&test.db);
    let rows = repo.get_all().await?;

    assert!(rows.is_empty());

    Ok(())
}

/// Tests error handling when the table is missing.
///
/// Expected: Err
#[tokio::test]
async fn fails_when_table_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let repo = PlayerRankRepository::new(&test.db);
    let result = repo.get_all().await;

    assert!(result.is_err());

    Ok(())
}
