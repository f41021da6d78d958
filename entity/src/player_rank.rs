use sea_orm::entity::prelude::*;

/// One tier placement of a player in a single game mode.
///
/// A player is identified by `discord_id`; there is at most one row per
/// (`discord_id`, `gamemode`) pair, enforced by a unique index created in the migration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player_rank")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub discord_id: String,
    pub minecraft_name: String,
    pub minecraft_uuid: Option<String>,
    pub gamemode: String,
    pub rank_name: Option<String>,
    pub rank_points: i32,
    pub region: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
