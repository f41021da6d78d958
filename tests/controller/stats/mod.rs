mod get_player_count;

use super::*;
