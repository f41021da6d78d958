pub use super::player_rank::Entity as PlayerRank;
