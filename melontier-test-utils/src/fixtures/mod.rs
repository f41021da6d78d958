//! Test fixture modules for database record creation.
//!
//! - `rank` - Player rank rows, one per player per game mode

pub mod rank;
