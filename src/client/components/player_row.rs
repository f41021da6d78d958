use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrophy;
use dioxus_free_icons::Icon;

use crate::{
    client::{components::TierBadge, router::Route},
    model::player::PlayerDto,
};

fn podium_class(position: usize) -> Option<&'static str> {
    match position {
        1 => Some("text-yellow-400"),
        2 => Some("text-gray-300"),
        3 => Some("text-amber-600"),
        _ => None,
    }
}

/// A leaderboard entry: position, avatar, name, title, points and held tiers
#[component]
pub fn PlayerRow(position: usize, player: PlayerDto) -> Element {
    let tiers = player.ranked_tiers();
    let avatar = player.avatar_url.clone().unwrap_or_default();

    rsx!(
        li { class: "list-row items-center",
            div { class: "w-10 flex justify-center text-lg font-bold",
                if let Some(class) = podium_class(position) {
                    span { class: "flex items-center gap-1 {class}",
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaTrophy
                        }
                        "{position}"
                    }
                } else {
                    "{position}"
                }
            }
            div { class: "avatar",
                div { class: "w-10 h-10 rounded",
                    img { src: "{avatar}", alt: "{player.username}" }
                }
            }
            div { class: "flex flex-col",
                Link {
                    to: Route::PlayerProfile { id: player.id.clone() },
                    class: "font-semibold link link-hover",
                    "{player.username}"
                }
                p { class: "text-xs opacity-70",
                    "{player.combat_title.name()} ({player.total_points} points)"
                }
            }
            div { class: "flex flex-wrap gap-1 justify-end",
                for (mode, tier) in tiers {
                    TierBadge { key: "{mode.id()}", mode, tier }
                }
            }
        }
    )
}

#[component]
pub fn PlayerRowSkeleton() -> Element {
    rsx!(
        li { class: "list-row items-center",
            div { class: "skeleton h-6 w-10" }
            div { class: "skeleton h-10 w-10 rounded" }
            div { class: "flex flex-col gap-1",
                div { class: "skeleton h-4 w-32" }
                div { class: "skeleton h-3 w-24" }
            }
            div { class: "skeleton h-5 w-40" }
        }
    )
}
