//! HTTP controller endpoints for the MelonTier web API.
//!
//! Axum handlers for the leaderboard, player profiles and statistics. Controllers parse
//! path and body input, call into the services and map the results to HTTP responses. Each
//! handler carries a utoipa annotation for the OpenAPI document.

pub mod player;
pub mod ranking;
pub mod stats;
