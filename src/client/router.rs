use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Home, ModeRankings, NotFound, PlayerProfile, Search},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/rankings/:mode")]
    ModeRankings { mode: String },

    #[route("/search/:query")]
    Search { query: String },

    #[route("/player/:id")]
    PlayerProfile { id: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
