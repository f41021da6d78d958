use sea_orm_migration::{prelude::*, schema::*};

static IDX_PLAYER_RANK_DISCORD_ID_GAMEMODE: &str = "idx-player_rank-discord_id-gamemode";
static IDX_PLAYER_RANK_MINECRAFT_NAME: &str = "idx-player_rank-minecraft_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerRank::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerRank::Id))
                    .col(string(PlayerRank::DiscordId))
                    .col(string(PlayerRank::MinecraftName))
                    .col(string_null(PlayerRank::MinecraftUuid))
                    .col(string(PlayerRank::Gamemode))
                    .col(string_null(PlayerRank::RankName))
                    .col(integer(PlayerRank::RankPoints))
                    .col(string_null(PlayerRank::Region))
                    .col(timestamp(PlayerRank::CreatedAt))
                    .col(timestamp(PlayerRank::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Upserts target this index, one row per player per game mode
        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_RANK_DISCORD_ID_GAMEMODE)
                    .table(PlayerRank::Table)
                    .col(PlayerRank::DiscordId)
                    .col(PlayerRank::Gamemode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_RANK_MINECRAFT_NAME)
                    .table(PlayerRank::Table)
                    .col(PlayerRank::MinecraftName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_RANK_MINECRAFT_NAME)
                    .table(PlayerRank::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_RANK_DISCORD_ID_GAMEMODE)
                    .table(PlayerRank::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerRank::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PlayerRank {
    Table,
    Id,
    DiscordId,
    MinecraftName,
    MinecraftUuid,
    Gamemode,
    RankName,
    RankPoints,
    Region,
    CreatedAt,
    UpdatedAt,
}
