//! Error types for the MelonTier server application.
//!
//! This module provides the error handling system for the server, with specialized error types
//! for configuration, ranking queries and player writes. All errors implement `IntoResponse` for
//! Axum HTTP responses and use `thiserror` for their `Display` and `Error` implementations.

pub mod config;
pub mod player;
pub mod ranking;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, player::PlayerError, ranking::RankingError},
};

/// Main error type for the MelonTier server application.
///
/// Aggregates the domain-specific error types and the database error into a single type. The
/// `#[from]` attributes allow conversion via the `?` operator, and the `IntoResponse`
/// implementation maps each error to its HTTP response.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Ranking errors (unknown game mode)
/// - Player errors (unknown player, malformed write payload)
/// - Database errors (connection failures, query errors)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Ranking query error (unrecognized game mode).
    #[error(transparent)]
    RankingError(#[from] RankingError),
    /// Player error (not found, invalid create/update payload).
    #[error(transparent)]
    PlayerError(#[from] PlayerError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Unknown game mode or malformed player payload
/// - 404 Not Found - Unknown player
/// - 500 Internal Server Error - Configuration and database errors (logged)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::RankingError(err) => err.into_response(),
            Self::PlayerError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
