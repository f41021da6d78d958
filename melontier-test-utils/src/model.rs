//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main melontier crate to keep signatures consistent
//! across tests.

/// Type alias for a player's rank in a single game mode.
pub type PlayerRankModel = entity::player_rank::Model;
