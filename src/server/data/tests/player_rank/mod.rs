use super::*;

mod count_players;
mod get_all;
mod get_by_discord_id;
mod update_profile;
mod upsert_many;
