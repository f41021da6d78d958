//! Ranking vocabulary and the canonical scoring configuration.
//!
//! Every deployment-specific constant of the leaderboard lives in [`RANKING`]: the game modes and
//! their display names, the tier point table, the combat title thresholds and the regions. The
//! enums in this module only name things; the values attached to them are looked up through the
//! configuration.

use serde::{Deserialize, Serialize};

/// A game mode players can hold a tier in.
///
/// `Overall` is synthetic: it selects the total-points leaderboard and never holds a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Overall,
    Ltm,
    Crystal,
    Uhc,
    Pot,
    Nethop,
    Smp,
    Sword,
    Axe,
    Mace,
}

impl GameMode {
    /// Identifier used in URLs and in the `gamemode` database column.
    pub fn id(self) -> &'static str {
        match self {
            Self::Overall => "overall",
            Self::Ltm => "ltm",
            Self::Crystal => "crystal",
            Self::Uhc => "uhc",
            Self::Pot => "pot",
            Self::Nethop => "nethop",
            Self::Smp => "smp",
            Self::Sword => "sword",
            Self::Axe => "axe",
            Self::Mace => "mace",
        }
    }

    /// Looks up a configured game mode by its exact identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        RANKING
            .modes
            .iter()
            .map(|info| info.mode)
            .find(|mode| mode.id() == id)
    }

    /// Display name from the ranking configuration.
    pub fn name(self) -> &'static str {
        RANKING
            .modes
            .iter()
            .find(|info| info.mode == self)
            .map(|info| info.name)
            .unwrap_or_else(|| self.id())
    }

    pub fn is_overall(self) -> bool {
        self == Self::Overall
    }
}

/// Tier placement within a game mode, HT1 being the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum TierLevel {
    Ht1,
    Lt1,
    Ht2,
    Lt2,
    Ht3,
    Lt3,
    Ht4,
    Lt4,
    Ht5,
    Lt5,
}

impl TierLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ht1 => "HT1",
            Self::Lt1 => "LT1",
            Self::Ht2 => "HT2",
            Self::Lt2 => "LT2",
            Self::Ht3 => "HT3",
            Self::Lt3 => "LT3",
            Self::Ht4 => "HT4",
            Self::Lt4 => "LT4",
            Self::Ht5 => "HT5",
            Self::Lt5 => "LT5",
        }
    }

    /// Parses a stored tier label, returning `None` for labels outside the vocabulary.
    pub fn from_label(label: &str) -> Option<Self> {
        RANKING
            .tiers
            .iter()
            .map(|(tier, _)| *tier)
            .find(|tier| tier.label() == label)
    }

    /// Point value of this tier from the ranking configuration.
    pub fn points(self) -> u32 {
        RANKING.points(self)
    }

    pub fn is_high(self) -> bool {
        self.label().starts_with("HT")
    }
}

/// A tier as read back from storage.
///
/// Labels outside the vocabulary are kept as written so they still display, but are worth no
/// points and rank below every known tier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tier {
    Known(TierLevel),
    Unknown(String),
}

impl Tier {
    pub fn from_label(label: &str) -> Self {
        match TierLevel::from_label(label) {
            Some(tier) => Self::Known(tier),
            None => Self::Unknown(label.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Known(tier) => tier.label(),
            Self::Unknown(label) => label,
        }
    }

    pub fn points(&self) -> u32 {
        self.level().map(TierLevel::points).unwrap_or(0)
    }

    pub fn level(&self) -> Option<TierLevel> {
        match self {
            Self::Known(tier) => Some(*tier),
            Self::Unknown(_) => None,
        }
    }

    pub fn is_high(&self) -> bool {
        self.level().is_some_and(TierLevel::is_high)
    }
}

impl From<TierLevel> for Tier {
    fn from(tier: TierLevel) -> Self {
        Self::Known(tier)
    }
}

/// Title awarded from a player's total points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum CombatTitle {
    #[serde(rename = "Combat Specialist")]
    Specialist,
    #[serde(rename = "Combat Expert")]
    Expert,
    #[serde(rename = "Combat Ace")]
    Ace,
    #[serde(rename = "Combat Master")]
    Master,
    #[serde(rename = "Combat Grandmaster")]
    Grandmaster,
}

impl CombatTitle {
    pub fn name(self) -> &'static str {
        match self {
            Self::Specialist => "Combat Specialist",
            Self::Expert => "Combat Expert",
            Self::Ace => "Combat Ace",
            Self::Master => "Combat Master",
            Self::Grandmaster => "Combat Grandmaster",
        }
    }
}

/// Server region a player competes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    Na,
    Eu,
    As,
    Sa,
    Oc,
}

impl Region {
    pub fn code(self) -> &'static str {
        match self {
            Self::Na => "NA",
            Self::Eu => "EU",
            Self::As => "AS",
            Self::Sa => "SA",
            Self::Oc => "OC",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        RANKING
            .regions
            .iter()
            .copied()
            .find(|region| region.code() == code)
    }
}

/// Display information for a configured game mode.
pub struct ModeInfo {
    pub mode: GameMode,
    pub name: &'static str,
}

/// Scoring configuration shared by the aggregator, the API and the client.
pub struct RankingConfig {
    /// Game modes in display order, `Overall` first.
    pub modes: &'static [ModeInfo],
    /// Point value of each tier, highest first.
    pub tiers: &'static [(TierLevel, u32)],
    /// Minimum total points for each title, evaluated in order, first match wins.
    pub titles: &'static [(u32, CombatTitle)],
    /// Title for totals below every threshold.
    pub default_title: CombatTitle,
    pub regions: &'static [Region],
}

impl RankingConfig {
    pub fn points(&self, tier: TierLevel) -> u32 {
        self.tiers
            .iter()
            .find(|(t, _)| *t == tier)
            .map(|(_, points)| *points)
            .unwrap_or(0)
    }

    pub fn title(&self, total_points: u32) -> CombatTitle {
        self.titles
            .iter()
            .find(|(threshold, _)| total_points >= *threshold)
            .map(|(_, title)| *title)
            .unwrap_or(self.default_title)
    }

    /// Game modes that hold tiers, i.e. every mode except `Overall`.
    pub fn ranked_modes(&self) -> impl Iterator<Item = GameMode> + '_ {
        self.modes
            .iter()
            .map(|info| info.mode)
            .filter(|mode| !mode.is_overall())
    }

    /// Identifiers of every configured mode, `overall` included.
    pub fn mode_ids(&self) -> Vec<String> {
        self.modes
            .iter()
            .map(|info| info.mode.id().to_string())
            .collect()
    }
}

/// The canonical ranking configuration.
pub static RANKING: RankingConfig = RankingConfig {
    modes: &[
        ModeInfo {
            mode: GameMode::Overall,
            name: "Overall",
        },
        ModeInfo {
            mode: GameMode::Ltm,
            name: "LTMs",
        },
        ModeInfo {
            mode: GameMode::Crystal,
            name: "Crystal",
        },
        ModeInfo {
            mode: GameMode::Uhc,
            name: "UHC",
        },
        ModeInfo {
            mode: GameMode::Pot,
            name: "Pot",
        },
        ModeInfo {
            mode: GameMode::Nethop,
            name: "NethOP",
        },
        ModeInfo {
            mode: GameMode::Smp,
            name: "SMP",
        },
        ModeInfo {
            mode: GameMode::Sword,
            name: "Sword",
        },
        ModeInfo {
            mode: GameMode::Axe,
            name: "Axe",
        },
        ModeInfo {
            mode: GameMode::Mace,
            name: "Mace",
        },
    ],
    tiers: &[
        (TierLevel::Ht1, 60),
        (TierLevel::Lt1, 45),
        (TierLevel::Ht2, 30),
        (TierLevel::Lt2, 20),
        (TierLevel::Ht3, 10),
        (TierLevel::Lt3, 6),
        (TierLevel::Ht4, 4),
        (TierLevel::Lt4, 3),
        (TierLevel::Ht5, 2),
        (TierLevel::Lt5, 1),
    ],
    titles: &[
        (200, CombatTitle::Grandmaster),
        (100, CombatTitle::Master),
        (50, CombatTitle::Ace),
        (20, CombatTitle::Expert),
    ],
    default_title: CombatTitle::Specialist,
    regions: &[Region::Na, Region::Eu, Region::As, Region::Sa, Region::Oc],
};
