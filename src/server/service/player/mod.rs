//! Player write service.
//!
//! Players are not stored as rows of their own: creating or updating one rewrites the player's
//! rank rows inside a single transaction and returns the freshly aggregated view.

pub mod seed;

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        player::{CreatePlayerDto, PlayerDto, UpdatePlayerDto},
        tier::{GameMode, TierLevel, RANKING},
    },
    server::{
        data::player_rank::{PlayerProfile, PlayerRankRepository},
        error::{player::PlayerError, Error},
        service::ranking::aggregate::aggregate,
    },
};

const MAX_ID_LEN: usize = 32;
const MAX_USERNAME_LEN: usize = 16;
const MAX_UUID_LEN: usize = 36;

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    /// Creates a new instance of [`PlayerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a player, or replaces every rank of an existing one.
    ///
    /// One row is written per ranked game mode, unranked where the payload has no tier, so a
    /// player without any tier still exists afterwards. `overall` entries are ignored.
    ///
    /// # Returns
    /// - `Ok(PlayerDto)` - The aggregated player as stored
    /// - `Err(Error::PlayerError)` - Payload failed validation
    /// - `Err(Error::DbErr)` - Writing the rank rows failed, nothing was written
    pub async fn create(&self, payload: CreatePlayerDto) -> Result<PlayerDto, Error> {
        validate_id(&payload.id)?;
        validate_username(&payload.username)?;
        validate_uuid(payload.minecraft_uuid.as_deref())?;

        let profile = PlayerProfile {
            discord_id: payload.id,
            minecraft_name: payload.username,
            minecraft_uuid: payload.minecraft_uuid,
            region: payload.region,
        };
        let tiers: Vec<(GameMode, Option<TierLevel>)> = RANKING
            .ranked_modes()
            .map(|mode| (mode, payload.tiers.get(&mode).copied().flatten()))
            .collect();

        let txn = self.db.begin().await?;
        let rank_repo = PlayerRankRepository::new(&txn);

        rank_repo.upsert_many(&profile, tiers).await?;
        // Also covers rows of modes outside the configuration
        rank_repo.update_profile(&profile).await?;
        let records = rank_repo.get_by_discord_id(&profile.discord_id).await?;

        txn.commit().await?;

        let player = aggregate(&records)
            .into_iter()
            .next()
            .ok_or_else(|| PlayerError::NotFound(profile.discord_id.clone()))?;

        tracing::info!(
            player_id = %player.id,
            total_points = player.total_points,
            "Created player {}",
            player.username
        );

        Ok(player)
    }

    /// Applies a partial update to an existing player.
    ///
    /// Profile fields present in the payload are written to every rank row of the player. Each
    /// entry of `tiers` replaces that game mode's tier, other modes are left as they are.
    ///
    /// # Returns
    /// - `Ok(Some(PlayerDto))` - The updated player
    /// - `Ok(None)` - No player with `id` exists, nothing was written
    /// - `Err(Error::PlayerError)` - Payload failed validation
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was written
    pub async fn update(
        &self,
        id: &str,
        payload: UpdatePlayerDto,
    ) -> Result<Option<PlayerDto>, Error> {
        if let Some(username) = payload.username.as_deref() {
            validate_username(username)?;
        }
        validate_uuid(payload.minecraft_uuid.as_deref())?;

        let txn = self.db.begin().await?;
        let rank_repo = PlayerRankRepository::new(&txn);

        let records = rank_repo.get_by_discord_id(id).await?;
        let Some(current) = aggregate(&records).into_iter().next() else {
            return Ok(None);
        };

        let profile = PlayerProfile {
            discord_id: current.id,
            minecraft_name: payload.username.unwrap_or(current.username),
            minecraft_uuid: payload.minecraft_uuid.or(current.minecraft_uuid),
            region: payload.region.or(current.region),
        };

        rank_repo.update_profile(&profile).await?;
        if let Some(tiers) = payload.tiers {
            let tiers = tiers
                .into_iter()
                .filter(|(mode, _)| !mode.is_overall())
                .collect();
            rank_repo.upsert_many(&profile, tiers).await?;
        }
        let records = rank_repo.get_by_discord_id(id).await?;

        txn.commit().await?;

        let player = aggregate(&records).into_iter().next();
        if let Some(player) = &player {
            tracing::info!(
                player_id = %player.id,
                total_points = player.total_points,
                "Updated player {}",
                player.username
            );
        }

        Ok(player)
    }
}

fn validate_id(id: &str) -> Result<(), PlayerError> {
    if id.trim().is_empty() {
        return Err(PlayerError::InvalidPayload("id must not be empty".to_string()));
    }
    if id.chars().count() > MAX_ID_LEN {
        return Err(PlayerError::InvalidPayload(format!(
            "id must be at most {} characters",
            MAX_ID_LEN
        )));
    }

    Ok(())
}

fn validate_username(username: &str) -> Result<(), PlayerError> {
    let len = username.trim().chars().count();
    if len == 0 || username.chars().count() > MAX_USERNAME_LEN {
        return Err(PlayerError::InvalidPayload(format!(
            "username must be between 1 and {} characters",
            MAX_USERNAME_LEN
        )));
    }

    Ok(())
}

fn validate_uuid(uuid: Option<&str>) -> Result<(), PlayerError> {
    match uuid {
        Some(uuid) if uuid.chars().count() > MAX_UUID_LEN => Err(PlayerError::InvalidPayload(
            format!("minecraftUuid must be at most {} characters", MAX_UUID_LEN),
        )),
        _ => Ok(()),
    }
}
