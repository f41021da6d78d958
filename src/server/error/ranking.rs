use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::{api::InvalidGameModeDto, tier::RANKING};

#[derive(Error, Debug)]
pub enum RankingError {
    #[error("Game mode {0:?} is not a configured game mode")]
    InvalidGameMode(String),
}

impl IntoResponse for RankingError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidGameMode(ref mode) => {
                tracing::debug!(mode = %mode, "{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(InvalidGameModeDto {
                        error: "Invalid game mode".to_string(),
                        valid_modes: RANKING.mode_ids(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
