//! Folding of per-mode rank rows into per-player views.

use std::collections::HashMap;

use crate::{
    model::{
        player::{minecraft_avatar_url, PlayerDto, PlayerTiers},
        tier::{GameMode, Region, Tier, RANKING},
    },
    server::model::db::PlayerRankModel,
};

/// Avatar size requested for leaderboard entries
const AVATAR_SIZE: u32 = 64;

/// Aggregates rank rows into one [`PlayerDto`] per distinct `discord_id`.
///
/// Players are returned in the order their first row appears. Profile fields come from that
/// first row. Game modes are matched case-insensitively; rows for `overall` or for a game mode
/// outside the configuration are skipped. A tier label outside the vocabulary is kept as held
/// but adds no points.
pub fn aggregate(records: &[PlayerRankModel]) -> Vec<PlayerDto> {
    let mut players: Vec<PlayerDto> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let position = *positions
            .entry(record.discord_id.as_str())
            .or_insert_with(|| {
                players.push(new_player(record));
                players.len() - 1
            });

        let Some(mode) = GameMode::from_id(&record.gamemode.to_ascii_lowercase())
            .filter(|mode| !mode.is_overall())
        else {
            continue;
        };

        let tier = record.rank_name.as_deref().map(Tier::from_label);
        players[position].tiers.insert(mode, tier);
    }

    for player in &mut players {
        player.total_points = total_points(&player.tiers);
        player.combat_title = RANKING.title(player.total_points);
    }

    players
}

/// Sum of the point values of every held tier
pub fn total_points(tiers: &PlayerTiers) -> u32 {
    tiers.values().flatten().map(Tier::points).sum()
}

fn new_player(record: &PlayerRankModel) -> PlayerDto {
    PlayerDto {
        id: record.discord_id.clone(),
        username: record.minecraft_name.clone(),
        minecraft_uuid: record.minecraft_uuid.clone(),
        region: record.region.as_deref().and_then(Region::from_code),
        total_points: 0,
        combat_title: RANKING.default_title,
        avatar_url: Some(minecraft_avatar_url(&record.minecraft_name, AVATAR_SIZE)),
        tiers: RANKING.ranked_modes().map(|mode| (mode, None)).collect(),
    }
}
