//! Player rank database insertion utilities.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::rank::RankFixtures, model::PlayerRankModel};

impl<'a> RankFixtures<'a> {
    /// Insert a single rank row.
    ///
    /// # Arguments
    /// - `discord_id` - Player identity
    /// - `username` - Minecraft username
    /// - `gamemode` - Raw gamemode identifier
    /// - `rank_name` - Raw tier label, `None` for an unranked row
    ///
    /// # Returns
    /// - `Ok(PlayerRankModel)` - The created row
    /// - `Err(TestError::DbErr)` - Insert failed, e.g. on a duplicate `(discord_id, gamemode)`
    pub async fn insert_rank(
        &self,
        discord_id: &str,
        username: &str,
        gamemode: &str,
        rank_name: Option<&str>,
    ) -> Result<PlayerRankModel, TestError> {
        self.insert_rank_with_region(discord_id, username, gamemode, rank_name, None)
            .await
    }

    pub async fn insert_rank_with_region(
        &self,
        discord_id: &str,
        username: &str,
        gamemode: &str,
        rank_name: Option<&str>,
        region: Option<&str>,
    ) -> Result<PlayerRankModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::PlayerRank::insert(entity::player_rank::ActiveModel {
                discord_id: ActiveValue::Set(discord_id.to_string()),
                minecraft_name: ActiveValue::Set(username.to_string()),
                minecraft_uuid: ActiveValue::Set(None),
                gamemode: ActiveValue::Set(gamemode.to_string()),
                rank_name: ActiveValue::Set(rank_name.map(str::to_string)),
                rank_points: ActiveValue::Set(0),
                region: ActiveValue::Set(region.map(str::to_string)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert one rank row per `(gamemode, tier)` pair for a player.
    ///
    /// # Returns
    /// - `Ok(Vec<PlayerRankModel>)` - The created rows in insertion order
    /// - `Err(TestError::DbErr)` - An insert failed
    pub async fn insert_player(
        &self,
        discord_id: &str,
        username: &str,
        region: Option<&str>,
        tiers: &[(&str, &str)],
    ) -> Result<Vec<PlayerRankModel>, TestError> {
        let mut rows = Vec::with_capacity(tiers.len());

        for (gamemode, tier) in tiers {
            rows.push(
                self.insert_rank_with_region(discord_id, username, gamemode, Some(tier), region)
                    .await?,
            );
        }

        Ok(rows)
    }
}
