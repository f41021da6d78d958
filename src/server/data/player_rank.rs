use chrono::Utc;
use migration::{Expr, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{
    model::tier::{GameMode, Region, TierLevel},
    server::model::db::PlayerRankModel,
};

/// Profile columns repeated on every rank row of a player
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    pub discord_id: String,
    pub minecraft_name: String,
    pub minecraft_uuid: Option<String>,
    pub region: Option<Region>,
}

pub struct PlayerRankRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRankRepository<'a, C> {
    /// Creates a new instance of [`PlayerRankRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Every rank row in storage order
    pub async fn get_all(&self) -> Result<Vec<PlayerRankModel>, DbErr> {
        entity::prelude::PlayerRank::find()
            .order_by_asc(entity::player_rank::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_discord_id(&self, discord_id: &str) -> Result<Vec<PlayerRankModel>, DbErr> {
        entity::prelude::PlayerRank::find()
            .filter(entity::player_rank::Column::DiscordId.eq(discord_id))
            .order_by_asc(entity::player_rank::Column::Id)
            .all(self.db)
            .await
    }

    /// Number of distinct players with at least one rank row
    pub async fn count_players(&self) -> Result<u64, DbErr> {
        entity::prelude::PlayerRank::find()
            .select_only()
            .column(entity::player_rank::Column::DiscordId)
            .distinct()
            .count(self.db)
            .await
    }

    /// Inserts or replaces a player's tier in each given game mode
    ///
    /// Rows are keyed on `(discord_id, gamemode)`. Existing rows keep their `created_at` and have
    /// every other column overwritten, including the profile columns.
    ///
    /// # Arguments
    /// - `profile`: Profile written to every affected row
    /// - `tiers`: Game mode and tier pairs, `None` storing an unranked row
    pub async fn upsert_many(
        &self,
        profile: &PlayerProfile,
        tiers: Vec<(GameMode, Option<TierLevel>)>,
    ) -> Result<Vec<PlayerRankModel>, DbErr> {
        if tiers.is_empty() {
            return Ok(Vec::new());
        }

        let ranks = tiers.into_iter().map(|(gamemode, tier)| {
            entity::player_rank::ActiveModel {
                discord_id: ActiveValue::Set(profile.discord_id.clone()),
                minecraft_name: ActiveValue::Set(profile.minecraft_name.clone()),
                minecraft_uuid: ActiveValue::Set(profile.minecraft_uuid.clone()),
                gamemode: ActiveValue::Set(gamemode.id().to_string()),
                rank_name: ActiveValue::Set(tier.map(|tier| tier.label().to_string())),
                rank_points: ActiveValue::Set(tier.map(|tier| tier.points() as i32).unwrap_or(0)),
                region: ActiveValue::Set(profile.region.map(|region| region.code().to_string())),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            }
        });

        entity::prelude::PlayerRank::insert_many(ranks)
            .on_conflict(
                OnConflict::columns([
                    entity::player_rank::Column::DiscordId,
                    entity::player_rank::Column::Gamemode,
                ])
                .update_columns([
                    entity::player_rank::Column::MinecraftName,
                    entity::player_rank::Column::MinecraftUuid,
                    entity::player_rank::Column::RankName,
                    entity::player_rank::Column::RankPoints,
                    entity::player_rank::Column::Region,
                    entity::player_rank::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Writes the profile columns to every rank row of `profile.discord_id`
    ///
    /// Returns the number of rows updated, 0 when the player has no rows.
    pub async fn update_profile(&self, profile: &PlayerProfile) -> Result<u64, DbErr> {
        let result = entity::prelude::PlayerRank::update_many()
            .col_expr(
                entity::player_rank::Column::MinecraftName,
                Expr::value(profile.minecraft_name.clone()),
            )
            .col_expr(
                entity::player_rank::Column::MinecraftUuid,
                Expr::value(profile.minecraft_uuid.clone()),
            )
            .col_expr(
                entity::player_rank::Column::Region,
                Expr::value(profile.region.map(|region| region.code().to_string())),
            )
            .col_expr(
                entity::player_rank::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::player_rank::Column::DiscordId.eq(profile.discord_id.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
