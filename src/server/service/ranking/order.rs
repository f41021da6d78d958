//! Leaderboard orderings.
//!
//! Every ordering breaks ties on player identity ascending so repeated reads of the same data
//! return the same order.

use crate::model::{
    player::PlayerDto,
    tier::{GameMode, Tier},
};

/// Sorts players by total points, highest first.
pub fn sort_by_total(players: &mut [PlayerDto]) {
    players.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Builds the leaderboard of a game mode.
///
/// `Overall` ranks every player by total points. Any other mode keeps only players holding a
/// tier in it, ranked by that tier's point value rather than by total. Unknown tier labels are
/// worth nothing and land at the bottom.
pub fn rank_by_mode(mut players: Vec<PlayerDto>, mode: GameMode) -> Vec<PlayerDto> {
    if mode.is_overall() {
        sort_by_total(&mut players);
        return players;
    }

    players.retain(|player| player.tier(mode).is_some());
    players.sort_by(|a, b| {
        let a_points = a.tier(mode).map(Tier::points).unwrap_or(0);
        let b_points = b.tier(mode).map(Tier::points).unwrap_or(0);

        b_points.cmp(&a_points).then_with(|| a.id.cmp(&b.id))
    });

    players
}
