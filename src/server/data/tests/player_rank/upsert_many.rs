//! Tests for PlayerRankRepository::upsert_many method.
//!
//! This module verifies inserting new rank rows, replacing the tier of existing rows,
//! storing unranked placements and the dependency on the unique index.

use super::*;

/// Tests inserting new rank rows.
///
/// Verifies the tier label and point value are stored for each game mode.
///
/// Expected: Ok with 2 created rows
#[tokio::test]
async fn inserts_new_ranks() -> Result<(), TestError> {
    let test = TestBuilder::new().with_rank_tables().build().await?;

    let repo = PlayerRankRepository::new(&test.db);
    let rows = repo
        .upsert_many(
            &profile("1", "Marlowww"),
            vec![
                (GameMode::Sword, Some(TierLevel::Ht1)),
                (GameMode::Axe, Some(TierLevel::Lt3)),
            ],
        )
        .await?;

    assert_eq!(rows.len(), 2);
    let sword = rows.iter().find(|row| row.gamemode == "sword").unwrap();
    assert_eq!(sword.rank_name.as_deref(), Some("HT1"));
    assert_eq!(sword.rank_points, 60);
    let axe = rows.iter().find(|row| row.gamemode == "axe").unwrap();
    assert_eq!(axe.rank_name.as_deref(), Some("LT3"));
    assert_eq!(axe.rank_points, 6);

    Ok(())
}

/// Tests replacing an existing rank.
///
/// Verifies the row keyed on (discord_id, gamemode) is updated in place, keeping its ID and
/// created_at while the tier and profile columns change.
///
/// Expected: Ok with a single row holding the new tier
#[tokio::test]
async fn replaces_existing_rank() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_rank_tables()
        .with_rank("1", "Marlowww", "sword", Some("LT5"))
        .build()
        .await?;
    let initial = PlayerRankRepository::new(&test.db)
        .get_by_discord_id("1")
        .await?;

    let mut updated_profile = profile("1", "Marlow");
    updated_profile.region = Some(Region::Eu);

    let repo = PlayerRankRepository::new(&test.db);
    repo.upsert_many(&updated_profile, vec![(GameMode::Sword, Some(TierLevel::Ht2))])
        .await?;

    let rows = repo.get_by_discord_id("1").await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, initial[0].id);
    assert_eq!(rows[0].created_at, initial[0].created_at);
    assert_eq!(rows[0].rank_name.as_deref(), Some("HT2"));
    assert_eq!(rows[0].rank_points, 30);
    assert_eq!(rows[0].minecraft_name, "Marlow");
    assert_eq!(rows[0].region.as_deref(), Some("EU"));

    Ok(())
}

/// Tests storing an unranked placement.
///
/// Expected: Ok with a row whose rank_name is NULL and rank_points 0
#[tokio::test]
async fn stores_unranked_placement() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_rank_tables()
        .with_rank("1", "Marlowww", "mace", Some("HT1"))
        .build()
        .await?;

    let repo = PlayerRankRepository::new(&test.db);
    repo.upsert_many(&profile("1", "Marlowww"), vec![(GameMode::Mace, None)])
        .await?;

    let rows = repo.get_by_discord_id("1").await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].rank_name, None);
    assert_eq!(rows[0].rank_points, 0);

    Ok(())
}

/// Tests upserting nothing.
///
/// Expected: Ok with empty Vec and no rows written
#[tokio::test]
async fn ignores_empty_batch() -> Result<(), TestError> {
    let test = TestBuilder::new().with_rank_tables().build().await?;

    let repo = PlayerRankRepository::new(&test.db);
    let rows = repo.upsert_many(&profile("1", "Marlowww"), Vec::new()).await?;

    assert!(rows.is_empty());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests upserting into a table created without the unique (discord_id, gamemode) index.
///
/// Verifies the conflict target is backed by the index rather than by the primary key.
///
/// Expected: Err, the insert has no constraint to resolve conflicts against
#[tokio::test]
async fn fails_without_unique_index() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PlayerRank)
        .build()
        .await?;

    let repo = PlayerRankRepository::new(&test.db);
    let result = repo
        .upsert_many(
            &profile("1", "Marlowww"),
            vec![(GameMode::Sword, Some(TierLevel::Ht1))],
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
