//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods are chained together, with all operations queued and executed during the
//! final `build()` call.

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// A player fixture: discord ID, username, region code and `(gamemode, tier)` pairs.
type PlayerFixture = (String, String, Option<String>, Vec<(String, String)>);

/// A single rank row fixture: discord ID, username, gamemode and optional tier label.
type RankFixture = (String, String, String, Option<String>);

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and rank
/// fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_rank_tables: bool,

    // Database fixtures to insert
    ranks: Vec<RankFixture>,
    players: Vec<PlayerFixture>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_rank_tables: false,
            ranks: Vec::new(),
            players: Vec::new(),
        }
    }

    /// Add the player rank table to the test database.
    ///
    /// Also creates the unique `(discord_id, gamemode)` index the upsert queries rely on, which
    /// [`with_table`](Self::with_table) would not.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_rank_tables(mut self) -> Self {
        self.include_rank_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a single rank row during `build()`.
    ///
    /// # Arguments
    /// - `discord_id` - Player identity
    /// - `username` - Minecraft username stored on the row
    /// - `gamemode` - Raw gamemode identifier, not validated
    /// - `rank_name` - Raw tier label, `None` for an unranked row
    pub fn with_rank(
        mut self,
        discord_id: &str,
        username: &str,
        gamemode: &str,
        rank_name: Option<&str>,
    ) -> Self {
        self.ranks.push((
            discord_id.to_string(),
            username.to_string(),
            gamemode.to_string(),
            rank_name.map(str::to_string),
        ));
        self
    }

    /// Insert a player with one rank row per `(gamemode, tier)` pair during `build()`.
    pub fn with_player(
        mut self,
        discord_id: &str,
        username: &str,
        region: Option<&str>,
        tiers: &[(&str, &str)],
    ) -> Self {
        self.players.push((
            discord_id.to_string(),
            username.to_string(),
            region.map(str::to_string),
            tiers
                .iter()
                .map(|(mode, tier)| (mode.to_string(), tier.to_string()))
                .collect(),
        ));
        self
    }

    /// Build the test context, creating tables and inserting fixtures in order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();
        let mut all_indexes = Vec::new();

        if self.include_rank_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.push(schema.create_table_from_entity(entity::prelude::PlayerRank));
            all_indexes.push(player_rank_unique_index());
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;
        setup.with_indexes(all_indexes).await?;

        // 2. Insert database fixtures
        for (discord_id, username, gamemode, rank_name) in self.ranks {
            setup
                .rank()
                .insert_rank(&discord_id, &username, &gamemode, rank_name.as_deref())
                .await?;
        }

        for (discord_id, username, region, tiers) in self.players {
            let tiers: Vec<(&str, &str)> = tiers
                .iter()
                .map(|(mode, tier)| (mode.as_str(), tier.as_str()))
                .collect();

            setup
                .rank()
                .insert_player(&discord_id, &username, region.as_deref(), &tiers)
                .await?;
        }

        Ok(setup)
    }
}

fn player_rank_unique_index() -> IndexCreateStatement {
    Index::create()
        .name("idx-player_rank-discord_id-gamemode")
        .table(entity::prelude::PlayerRank)
        .col(entity::player_rank::Column::DiscordId)
        .col(entity::player_rank::Column::Gamemode)
        .unique()
        .to_owned()
}
