use dioxus::prelude::*;

use crate::{
    client::router::Route,
    model::tier::{GameMode, RANKING},
};

fn route_for(mode: GameMode) -> Route {
    if mode.is_overall() {
        Route::Home {}
    } else {
        Route::ModeRankings {
            mode: mode.id().to_string(),
        }
    }
}

/// Tab bar switching between the leaderboards of each game mode
#[component]
pub fn GameModeTabs(active: GameMode) -> Element {
    rsx!(
        div { role: "tablist", class: "tabs tabs-box flex-wrap justify-center",
            for info in RANKING.modes.iter() {
                Link {
                    key: "{info.mode.id()}",
                    to: route_for(info.mode),
                    role: "tab",
                    class: if info.mode == active { "tab tab-active" } else { "tab" },
                    "{info.name}"
                }
            }
        }
    )
}
