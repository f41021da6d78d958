//! Ranking query service.
//!
//! Reads every rank row, folds them into player views with [`aggregate::aggregate`] and orders
//! the result with the functions in [`order`]. Nothing is cached: each call reflects the current
//! contents of the store.

pub mod aggregate;
pub mod order;

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        player::{GameModeDto, PlayerDto},
        tier::{GameMode, RANKING},
    },
    server::{data::player_rank::PlayerRankRepository, error::Error},
};

use self::{
    aggregate::aggregate,
    order::{rank_by_mode, sort_by_total},
};

pub struct RankingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RankingService<'a> {
    /// Creates a new instance of [`RankingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Leaderboard of a game mode, see [`rank_by_mode`] for the ordering.
    ///
    /// # Returns
    /// - `Ok(Vec<PlayerDto>)` - Ranked players, empty when nobody holds a tier in `mode`
    /// - `Err(Error::DbErr)` - Reading the rank rows failed
    pub async fn get_by_mode(&self, mode: GameMode) -> Result<Vec<PlayerDto>, Error> {
        let players = self.get_all().await?;

        Ok(rank_by_mode(players, mode))
    }

    /// Every player in first-seen order
    pub async fn get_all(&self) -> Result<Vec<PlayerDto>, Error> {
        let rank_repo = PlayerRankRepository::new(self.db);
        let records = rank_repo.get_all().await?;

        Ok(aggregate(&records))
    }

    /// Aggregated view of a single player
    ///
    /// # Returns
    /// - `Ok(Some(PlayerDto))` - Player has at least one rank row
    /// - `Ok(None)` - No rows exist for `id`
    /// - `Err(Error::DbErr)` - Reading the rank rows failed
    pub async fn get_by_id(&self, id: &str) -> Result<Option<PlayerDto>, Error> {
        let rank_repo = PlayerRankRepository::new(self.db);
        let records = rank_repo.get_by_discord_id(id).await?;

        Ok(aggregate(&records).into_iter().next())
    }

    /// Players whose username contains `query`, ignoring case, highest total first
    ///
    /// A blank query matches nobody.
    pub async fn search(&self, query: &str) -> Result<Vec<PlayerDto>, Error> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let mut players: Vec<PlayerDto> = self
            .get_all()
            .await?
            .into_iter()
            .filter(|player| player.username.to_lowercase().contains(&needle))
            .collect();
        sort_by_total(&mut players);

        Ok(players)
    }

    /// Number of distinct ranked players
    pub async fn count(&self) -> Result<u64, Error> {
        let rank_repo = PlayerRankRepository::new(self.db);

        Ok(rank_repo.count_players().await?)
    }

    /// Game modes players can hold a tier in, in display order
    pub fn game_modes(&self) -> Vec<GameModeDto> {
        RANKING
            .ranked_modes()
            .map(|mode| GameModeDto {
                id: mode,
                name: mode.name().to_string(),
            })
            .collect()
    }
}
