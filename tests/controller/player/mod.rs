mod create_player;
mod update_player;

use super::*;
