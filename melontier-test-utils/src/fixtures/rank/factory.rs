//! In-memory rank models for tests that don't need a database.

use chrono::NaiveDateTime;

use crate::model::PlayerRankModel;

/// Create a rank row model without touching the database.
///
/// # Arguments
/// - `id` - Row ID, determines storage order
/// - `discord_id` - Player identity
/// - `username` - Minecraft username
/// - `gamemode` - Raw gamemode identifier
/// - `rank_name` - Raw tier label, `None` for an unranked row
pub fn mock_rank(
    id: i32,
    discord_id: &str,
    username: &str,
    gamemode: &str,
    rank_name: Option<&str>,
) -> PlayerRankModel {
    PlayerRankModel {
        id,
        discord_id: discord_id.to_string(),
        minecraft_name: username.to_string(),
        minecraft_uuid: None,
        gamemode: gamemode.to_string(),
        rank_name: rank_name.map(str::to_string),
        rank_points: 0,
        region: None,
        created_at: NaiveDateTime::default(),
        updated_at: NaiveDateTime::default(),
    }
}

/// Create the rank rows of a single player, numbering them from `first_id`.
pub fn mock_player(
    first_id: i32,
    discord_id: &str,
    username: &str,
    tiers: &[(&str, &str)],
) -> Vec<PlayerRankModel> {
    tiers
        .iter()
        .enumerate()
        .map(|(offset, (gamemode, tier))| {
            mock_rank(
                first_id + offset as i32,
                discord_id,
                username,
                gamemode,
                Some(tier),
            )
        })
        .collect()
}
