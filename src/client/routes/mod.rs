pub mod leaderboard;
pub mod not_found;
pub mod player_profile;
pub mod search;

pub use leaderboard::{Home, ModeRankings};
pub use not_found::NotFound;
pub use player_profile::PlayerProfile;
pub use search::Search;
