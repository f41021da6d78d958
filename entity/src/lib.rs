//! SeaORM entities for the MelonTier database.

pub mod prelude;

pub mod player_rank;
