use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTriangleExclamation;
use dioxus_free_icons::Icon;

/// Notice shown in place of content that failed to load
#[component]
pub fn LoadError(what: &'static str) -> Element {
    rsx!(
        div { role: "alert", class: "alert alert-error alert-soft w-full",
            Icon {
                width: 20,
                height: 20,
                icon: FaTriangleExclamation
            }
            span { "Failed to load {what}. Please try again later." }
        }
    )
}
