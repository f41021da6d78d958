use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowLeft, FaEarthAmericas};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{LoadError, Page, TierBadge},
        router::Route,
        util::api::get_player,
    },
    model::{
        player::{minecraft_avatar_url, PlayerDto},
        tier::RANKING,
    },
};

#[component]
pub fn PlayerProfile(id: String) -> Element {
    let player = {
        let id = id.clone();
        use_resource(use_reactive!(|(id,)| async move { get_player(&id).await }))
    };

    rsx!(
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[720px] flex flex-col gap-4",
                Link { to: Route::Home {}, class: "btn btn-ghost btn-sm w-fit flex gap-2",
                    Icon {
                        width: 14,
                        height: 14,
                        icon: FaArrowLeft
                    }
                    "Back to rankings"
                }
                {match &*player.read_unchecked() {
                    Some(Ok(Some(player))) => rsx!(
                        Title { "{player.username} | MelonTier" }
                        ProfileCard { player: player.clone() }
                    ),
                    Some(Ok(None)) => rsx!(
                        div { class: "card bg-base-100 shadow-sm",
                            div { class: "card-body items-center text-center",
                                h2 { class: "card-title", "Player not found" }
                                p { class: "opacity-70", "No ranked player has the ID {id}." }
                            }
                        }
                    ),
                    Some(Err(err)) => {
                        tracing::error!("{}", err);
                        rsx!(LoadError { what: "player profile" })
                    }
                    None => rsx!(
                        div { class: "card bg-base-100 shadow-sm",
                            div { class: "card-body items-center gap-2",
                                div { class: "skeleton h-32 w-32 rounded" }
                                div { class: "skeleton h-6 w-40" }
                                div { class: "skeleton h-4 w-56" }
                            }
                        }
                    ),
                }}
            }
        }
    )
}

#[component]
fn ProfileCard(player: PlayerDto) -> Element {
    let tiers = player.ranked_tiers();
    let highest = tiers
        .first()
        .map(|(mode, tier)| format!("{} {}", tier.label(), mode.name()))
        .unwrap_or_else(|| "Unranked".to_string());
    let region = player
        .region
        .map(|region| region.code())
        .unwrap_or("Unknown");
    let avatar = minecraft_avatar_url(&player.username, 128);

    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body items-center gap-4",
                div { class: "avatar",
                    div { class: "w-32 h-32 rounded",
                        img { src: "{avatar}", alt: "{player.username}" }
                    }
                }
                div { class: "flex flex-col items-center",
                    h1 { class: "text-2xl font-bold", "{player.username}" }
                    p { class: "text-lg opacity-80", "{player.combat_title.name()}" }
                    span { class: "badge badge-ghost gap-1 mt-1",
                        Icon {
                            width: 12,
                            height: 12,
                            icon: FaEarthAmericas
                        }
                        "{region}"
                    }
                }
                div { class: "stats stats-vertical sm:stats-horizontal shadow",
                    div { class: "stat",
                        div { class: "stat-title", "Total Points" }
                        div { class: "stat-value", "{player.total_points}" }
                    }
                    div { class: "stat",
                        div { class: "stat-title", "Active Tiers" }
                        div { class: "stat-value", "{tiers.len()}" }
                    }
                    div { class: "stat",
                        div { class: "stat-title", "Highest Tier" }
                        div { class: "stat-value text-2xl", "{highest}" }
                    }
                }
                div { class: "w-full",
                    h2 { class: "text-lg font-semibold mb-2", "Tiers" }
                    ul { class: "grid grid-cols-2 sm:grid-cols-3 gap-2",
                        for mode in RANKING.ranked_modes() {
                            li { key: "{mode.id()}", class: "flex items-center justify-between p-2 rounded bg-base-200",
                                span { "{mode.name()}" }
                                if let Some(tier) = player.tier(mode) {
                                    TierBadge { mode, tier: tier.clone() }
                                } else {
                                    span { class: "text-xs opacity-50", "Unranked" }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
