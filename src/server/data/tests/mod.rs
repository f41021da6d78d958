use melontier_test_utils::prelude::*;

use crate::{
    model::tier::{GameMode, Region, TierLevel},
    server::data::player_rank::{PlayerProfile, PlayerRankRepository},
};

mod player_rank;

fn profile(discord_id: &str, minecraft_name: &str) -> PlayerProfile {
    PlayerProfile {
        discord_id: discord_id.to_string(),
        minecraft_name: minecraft_name.to_string(),
        minecraft_uuid: None,
        region: None,
    }
}
