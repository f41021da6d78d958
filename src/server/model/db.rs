//! Database model type aliases.
//!
//! This module provides type aliases for SeaORM database entity models used throughout the
//! application, so signatures don't need to reach into the `entity` crate directly.

/// Type alias for a player's rank in a single game mode.
///
/// # Fields (from `entity::player_rank::Model`)
/// - `id` - Primary key, insertion order of the row
/// - `discord_id` - Stable external identity of the player
/// - `minecraft_name` - Minecraft username displayed on the leaderboard
/// - `minecraft_uuid` - Minecraft account UUID (nullable)
/// - `gamemode` - Game mode identifier, e.g. `pot`
/// - `rank_name` - Tier label such as `HT1` (nullable)
/// - `rank_points` - Point value of the tier when the row was written
/// - `region` - Region code (nullable)
/// - `created_at` - Timestamp when the row was created
/// - `updated_at` - Timestamp of the last update
pub type PlayerRankModel = entity::player_rank::Model;
