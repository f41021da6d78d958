//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/rankings` - Overall leaderboard
/// - `GET /api/rankings/{mode}` - Leaderboard of a single game mode
/// - `GET /api/gamemodes` - Ranked game modes
/// - `GET /api/players/search/{query}` - Search players by username
/// - `GET /api/players/{id}` - Player profile
/// - `POST /api/players` - Create or replace a player
/// - `PATCH /api/players/{id}` - Partially update a player
/// - `GET /api/stats/player-count` - Number of ranked players
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`, Swagger UI at
/// `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` ready to be merged into the main application router.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "MelonTier", description = "MelonTier API"), tags(
        (name = controller::ranking::RANKING_TAG, description = "Leaderboard API routes"),
        (name = controller::player::PLAYER_TAG, description = "Player API routes"),
        (name = controller::stats::STATS_TAG, description = "Statistics API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::ranking::get_rankings))
        .routes(routes!(controller::ranking::get_rankings_by_mode))
        .routes(routes!(controller::ranking::get_game_modes))
        .routes(routes!(controller::player::search_players))
        .routes(routes!(
            controller::player::get_player,
            controller::player::update_player
        ))
        .routes(routes!(controller::player::create_player))
        .routes(routes!(controller::stats::get_player_count))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
