//! Service layer for business logic.
//!
//! Services sit between the controllers and the repositories: `ranking` answers leaderboard
//! queries by aggregating rank rows, `player` validates and applies player writes.

pub mod player;
pub mod ranking;
