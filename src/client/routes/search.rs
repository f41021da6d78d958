use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::{LoadError, Page, PlayerRow, PlayerRowSkeleton},
    util::api::search_players,
};

#[component]
pub fn Search(query: String) -> Element {
    let results = {
        let query = query.clone();
        use_resource(use_reactive!(|(query,)| async move {
            search_players(&query).await
        }))
    };

    rsx!(
        Title { "Search \"{query}\" | MelonTier" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1080px] flex flex-col gap-4",
                h1 { class: "text-2xl font-bold",
                    "Results for \"{query}\""
                }
                {match &*results.read_unchecked() {
                    Some(Ok(players)) if players.is_empty() => rsx!(
                        div { class: "card bg-base-100 shadow-sm",
                            div { class: "card-body items-center text-center",
                                h2 { class: "card-title", "No players found" }
                                p { class: "opacity-70",
                                    "No player name contains \"{query}\". Check the spelling and try again."
                                }
                            }
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
                        rsx!(LoadError { what: "search results" })
                    }
                    None => rsx!(
                        ul { class: "list bg-base-100 rounded-box shadow-md",
                            for index in 0..3 {
                                PlayerRowSkeleton { key: "{index}" }
                            }
                        }
                    ),
                }}
            }
        }
    )
}
