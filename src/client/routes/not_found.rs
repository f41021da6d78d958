use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Page not found | MelonTier" }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                p { class: "text-2xl font-bold", "Page not found" }
                p { class: "opacity-70", "Nothing lives at /{path}" }
                Link { to: Route::Home {}, class: "btn btn-primary", "Back to rankings" }
            }
        }
    )
}
