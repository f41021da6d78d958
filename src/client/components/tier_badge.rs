use dioxus::prelude::*;

use crate::model::tier::{GameMode, Tier, TierLevel};

fn tier_class(tier: &Tier) -> &'static str {
    match tier.level() {
        Some(TierLevel::Ht1 | TierLevel::Lt1) => "badge-warning",
        Some(TierLevel::Ht2 | TierLevel::Lt2) => "badge-info",
        Some(TierLevel::Ht3 | TierLevel::Lt3) => "badge-success",
        Some(TierLevel::Ht4 | TierLevel::Lt4) => "badge-neutral",
        Some(TierLevel::Ht5 | TierLevel::Lt5) | None => "badge-ghost",
    }
}

#[component]
pub fn TierBadge(mode: GameMode, tier: Tier) -> Element {
    let class = tier_class(&tier);
    let style = if tier.is_high() { "" } else { "badge-outline" };

    rsx!(
        span {
            class: "badge badge-sm {class} {style}",
            title: "{mode.name()}: {tier.label()} ({tier.points()} points)",
            "{mode.name()} {tier.label()}"
        }
    )
}
