use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{GameModeTabs, LoadError, Page, PlayerRow, PlayerRowSkeleton},
        routes::NotFound,
        util::{api::get_rankings, refresh::wait_for_refresh},
    },
    model::tier::GameMode,
};

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "MelonTier | Minecraft PvP Tier Rankings" }
        Meta {
            name: "description",
            content: "Minecraft PvP tier list ranking players across every combat game mode."
        }
        Leaderboard { mode: GameMode::Overall }
    )
}

#[component]
pub fn ModeRankings(mode: String) -> Element {
    match GameMode::from_id(&mode) {
        Some(mode) => rsx!(
            Title { "{mode.name()} Rankings | MelonTier" }
            Leaderboard { mode }
        ),
        None => rsx!(NotFound { segments: vec!["rankings".to_string(), mode] }),
    }
}

#[component]
fn Leaderboard(mode: GameMode) -> Element {
    let mut rankings = use_resource(use_reactive!(|(mode,)| async move {
        get_rankings(mode).await
    }));

    use_future(move || async move {
        loop {
            wait_for_refresh().await;
            rankings.restart();
        }
    });

    rsx!(
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1080px] flex flex-col gap-4",
                h1 { class: "text-2xl font-bold text-center",
                    if mode.is_overall() {
                        "Overall Rankings"
                    } else {
                        "{mode.name()} Rankings"
                    }
                }
                GameModeTabs { active: mode }
                {match &*rankings.read_unchecked() {
                    Some(Ok(players)) if players.is_empty() => rsx!(
                        p { class: "text-center opacity-70",
                            "No ranked players in {mode.name()} yet"
                        }
                    ),
                    Some(Ok(players)) => rsx!(
                        ul { class: "list bg-base-100 rounded-box shadow-md",
                            for (index, player) in players.iter().enumerate() {
                                PlayerRow {
                                    key: "{player.id}",
                                    position: index + 1,
                                    player: player.clone()
                                }
                            }
                        }
                    ),
                    Some(Err(err)) => {
                        tracing::error!("{}", err);
                        rsx!(LoadError { what: "rankings" })
                    }
                    None => rsx!(
                        ul { class: "list bg-base-100 rounded-box shadow-md",
                            for index in 0..5 {
                                PlayerRowSkeleton { key: "{index}" }
                            }
                        }
                    ),
                }}
            }
        }
    )
}
