//! Tests for PlayerRankRepository::get_by_discord_id method.

use super::*;

/// Tests fetching only the requested player's rows.
///
/// Expected: Ok with the two rows belonging to player "1"
#[tokio::test]
async fn returns_rows_of_player() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_rank_tables()
        .with_player("1", "Marlowww", Some("NA"), &[("sword", "HT1"), ("axe", "LT2")])
        .with_player("2", "Swight", Some("EU"), &[("sword", "LT1")])
        .build()
        .await?;

    let repo = PlayerRankRepository::new(&test.db);
    let rows = repo.get_by_discord_id("1").await?;

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.discord_id == "1"));
    assert_eq!(rows[0].gamemode, "sword");
    assert_eq!(rows[1].gamemode, "axe");

    Ok(())
}

/// Tests fetching an unknown player.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_for_unknown_player() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_rank_tables()
        .with_player("1", "Marlowww", None, &[("sword", "HT1")])
        .build()
        .await?;

    let repo = PlayerRankRepository::new(&test.db);
    let rows = repo.get_by_discord_id("404").await?;

    assert!(rows.is_empty());

    Ok(())
}
