use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum PlayerError {
    #[error("Player with ID {0:?} not found")]
    NotFound(String),
    #[error("Invalid player payload: {0}")]
    InvalidPayload(String),
}

impl IntoResponse for PlayerError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(ref player_id) => {
                tracing::debug!(player_id = %player_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Player not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidPayload(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
