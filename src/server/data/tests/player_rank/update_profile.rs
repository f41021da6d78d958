//! Tests for PlayerRankRepository::update_profile method.

use super::*;

/// Tests writing profile columns to every row of a player.
///
/// Verifies other players' rows and the tier columns are left untouched.
///
/// Expected: Ok(2) with both rows of player "1" renamed
#[tokio::test]
async fn updates_every_row_of_player() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_rank_tables()
        .with_player("1", "Marlowww", Some("NA"), &[("sword", "HT1"), ("axe", "LT2")])
        .with_player("2", "Swight", Some("EU"), &[("sword", "LT1")])
        .build()
        .await?;

    let mut updated = profile("1", "Marlow");
    updated.minecraft_uuid = Some("e2d6b5f0-93f6-4e5f-9c43-7c3f2c1a1b2d".to_string());
    updated.region = Some(Region::Oc);

    let repo = PlayerRankRepository::new(&test.db);
    let rows_affected = repo.update_profile(&updated).await?;

    assert_eq!(rows_affected, 2);
    for row in repo.get_by_discord_id("1").await? {
        assert_eq!(row.minecraft_name, "Marlow");
        assert_eq!(row.minecraft_uuid, updated.minecraft_uuid);
        assert_eq!(row.region.as_deref(), Some("OC"));
        assert!(row.rank_name.is_some());
    }
    let other = repo.get_by_discord_id("2").await?;
    assert_eq!(other[0].minecraft_name, "Swight");
    assert_eq!(other[0].region.as_deref(), Some("EU"));

    Ok(())
}

/// Tests updating a player without rows.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_player() -> Result<(), TestError> {
    let test = TestBuilder::new().with_rank_tables().build().await?;

    let repo = PlayerRankRepository::new(&test.db);
    let rows_affected = repo.update_profile(&profile("404", "Nobody")).await?;

    assert_eq!(rows_affected, 0);

    Ok(())
}
