use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMagnifyingGlass, FaUsers};
use dioxus_free_icons::Icon;

pub use crate::client::router::Route;
use crate::client::util::{api::get_player_count, refresh::wait_for_refresh};

#[component]
pub fn Navbar() -> Element {
    let mut query = use_signal(String::new);
    let mut player_count = use_resource(|| async move { get_player_count().await });

    use_future(move || async move {
        loop {
            wait_for_refresh().await;
            player_count.restart();
        }
    });

    let count_label = match &*player_count.read_unchecked() {
        Some(Ok(count)) => format!("{} ranked players", count),
        _ => "Ranked players".to_string(),
    };

    rsx! {
        div {
            class: "navbar bg-base-200 fixed top-0 z-10",
            div {
                class: "navbar-start",
                Link { to: Route::Home {}, class: "flex items-center gap-2",
                    p { class: "text-xl font-bold",
                        "MelonTier"
                    }
                }
            }
            div {
                class: "navbar-center hidden md:flex",
                span { class: "badge badge-ghost gap-2",
                    Icon {
                        width: 14,
                        height: 14,
                        icon: FaUsers
                    }
                    "{count_label}"
                }
            }
            div {
                class: "navbar-end",
                form {
                    class: "join",
                    onsubmit: move |event| {
                        event.prevent_default();
                        let value = query.read().trim().to_string();
                        if !value.is_empty() {
                            navigator().push(Route::Search { query: value });
                        }
                    },
                    input {
                        class: "input input-sm join-item",
                        r#type: "search",
                        placeholder: "Search players",
                        value: "{query}",
                        oninput: move |event| query.set(event.value()),
                    }
                    button { class: "btn btn-sm join-item", r#type: "submit",
                        Icon {
                            width: 14,
                            height: 14,
                            icon: FaMagnifyingGlass
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
