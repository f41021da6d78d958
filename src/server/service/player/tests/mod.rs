
use melontier_test_utils::prelude::*;

use super::*;

use crate::{
    model::{player::TierMap, tier::{CombatTitle, Region}},
    server::service::ranking::RankingService,
};

fn create_payload(id: &str, username: &str, tiers: &[(GameMode, TierLevel)]) -> CreatePlayerDto {
    CreatePlayerDto {
        id: id.to_string(),
        username: username.to_string(),
        minecraft_uuid: None,
        region: Some(Region::Na),
        tiers: tiers.iter().map(|(mode, tier)| (*mode, Some(*tier))).collect(),
    }
}
