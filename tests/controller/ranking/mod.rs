mod get_game_modes;
mod get_rankings;
mod get_rankings_by_mode;

use super::*;
