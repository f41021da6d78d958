pub mod game_mode_tabs;
pub mod load_error;
pub mod navbar;
pub mod page;
pub mod player_row;
pub mod tier_badge;

pub use game_mode_tabs::GameModeTabs;
pub use load_error::LoadError;
pub use navbar::Navbar;
pub use page::Page;
pub use player_row::{PlayerRow, PlayerRowSkeleton};
pub use tier_badge::TierBadge;
