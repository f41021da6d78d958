//! Demo players inserted on startup when `SEED_DEMO_DATA` is enabled.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        player::CreatePlayerDto,
        tier::{GameMode, Region, TierLevel},
    },
    server::{data::player_rank::PlayerRankRepository, error::Error, service::player::PlayerService},
};

use GameMode::*;
use TierLevel::*;

type DemoPlayer = (&'static str, &'static str, Region, &'static [(GameMode, TierLevel)]);

static DEMO_PLAYERS: &[DemoPlayer] = &[
    (
        "demo-marlowww",
        "Marlowww",
        Region::Na,
        &[
            (Crystal, Ht1),
            (Uhc, Lt1),
            (Pot, Lt1),
            (Nethop, Lt1),
            (Smp, Ht1),
            (Sword, Lt1),
            (Axe, Lt1),
            (Mace, Lt1),
        ],
    ),
    (
        "demo-itzrealme",
        "ItzRealMe",
        Region::Na,
        &[
            (Crystal, Ht1),
            (Uhc, Lt2),
            (Pot, Ht1),
            (Nethop, Ht1),
            (Smp, Ht1),
            (Sword, Ht2),
            (Axe, Lt2),
            (Mace, Lt2),
        ],
    ),
    (
        "demo-swight",
        "Swight",
        Region::Na,
        &[
            (Crystal, Ht3),
            (Uhc, Ht1),
            (Pot, Lt2),
            (Nethop, Ht2),
            (Smp, Ht1),
            (Sword, Lt2),
            (Axe, Ht1),
            (Mace, Ht3),
        ],
    ),
    (
        "demo-coldified",
        "coldified",
        Region::Eu,
        &[
            (Crystal, Lt3),
            (Uhc, Ht2),
            (Pot, Ht2),
            (Nethop, Lt2),
            (Smp, Ht1),
            (Sword, Lt2),
            (Axe, Ht2),
            (Mace, Ht2),
        ],
    ),
    ("demo-nethgod", "NethGod", Region::As, &[(Nethop, Ht1), (Pot, Lt3)]),
    ("demo-axemaster", "AxeMaster", Region::Sa, &[(Axe, Ht1), (Sword, Ht4)]),
    ("demo-potking", "PotKing", Region::Oc, &[(Pot, Lt1), (Ltm, Lt5)]),
];

/// Inserts the demo players unless the rank table already holds a player.
///
/// # Returns
/// - `Ok(usize)` - Number of players inserted, 0 when the table wasn't empty
/// - `Err(Error)` - Counting or inserting failed
pub async fn seed_demo_players(db: &DatabaseConnection) -> Result<usize, Error> {
    let rank_repo = PlayerRankRepository::new(db);
    if rank_repo.count_players().await? > 0 {
        tracing::info!("Rank table already populated, skipping demo seed");
        return Ok(0);
    }

    let player_service = PlayerService::new(db);
    for (id, username, region, tiers) in DEMO_PLAYERS {
        player_service
            .create(CreatePlayerDto {
                id: id.to_string(),
                username: username.to_string(),
                minecraft_uuid: None,
                region: Some(*region),
                tiers: tiers.iter().map(|(mode, tier)| (*mode, Some(*tier))).collect(),
            })
            .await?;
    }

    tracing::info!("Seeded {} demo players", DEMO_PLAYERS.len());

    Ok(DEMO_PLAYERS.len())
}
