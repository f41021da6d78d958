use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::tier::{CombatTitle, GameMode, Region, Tier, TierLevel};

/// Tier requested for each game mode in a write, `None` where the player is unranked.
pub type TierMap = BTreeMap<GameMode, Option<TierLevel>>;

/// Tier held in each ranked game mode as read back from storage.
pub type PlayerTiers = BTreeMap<GameMode, Option<Tier>>;

/// Aggregated view of a player across every game mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    /// Stable external identity (Discord ID)
    pub id: String,
    /// Minecraft username shown on the leaderboard
    pub username: String,
    pub minecraft_uuid: Option<String>,
    pub region: Option<Region>,
    /// Sum of the point values of every held tier
    pub total_points: u32,
    pub combat_title: CombatTitle,
    pub avatar_url: Option<String>,
    #[cfg_attr(feature = "server", schema(value_type = Object))]
    pub tiers: PlayerTiers,
}

impl PlayerDto {
    /// Held tiers, best first. Ties keep game mode display order.
    pub fn ranked_tiers(&self) -> Vec<(GameMode, Tier)> {
        let mut tiers: Vec<(GameMode, Tier)> = self
            .tiers
            .iter()
            .filter_map(|(mode, tier)| tier.clone().map(|tier| (*mode, tier)))
            .collect();

        tiers.sort_by(|(_, a), (_, b)| b.points().cmp(&a.points()));
        tiers
    }

    /// Tier held in `mode`, including labels outside the vocabulary
    pub fn tier(&self, mode: GameMode) -> Option<&Tier> {
        self.tiers.get(&mode).and_then(Option::as_ref)
    }

    /// Known tier level held in `mode`
    pub fn tier_level(&self, mode: GameMode) -> Option<TierLevel> {
        self.tier(mode).and_then(Tier::level)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct GameModeDto {
    pub id: GameMode,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PlayerCountDto {
    /// Number of distinct ranked players
    pub count: u64,
}

/// Request body for creating a player
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerDto {
    /// Discord ID identifying the player
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub minecraft_uuid: Option<String>,
    #[serde(default)]
    pub region: Option<Region>,
    /// Tier per game mode, omitted modes are unranked
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Object))]
    pub tiers: TierMap,
}

/// Request body for partially updating a player
///
/// Absent fields are left unchanged. Every entry of `tiers` replaces that game mode's tier,
/// `null` removing the placement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerDto {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub minecraft_uuid: Option<String>,
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Option<Object>))]
    pub tiers: Option<TierMap>,
}

/// Avatar image for a Minecraft username
pub fn minecraft_avatar_url(username: &str, size: u32) -> String {
    format!("https://mc-heads.net/avatar/{}/{}", username, size)
}
