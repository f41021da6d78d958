pub mod api;
pub mod player;
pub mod tier;
