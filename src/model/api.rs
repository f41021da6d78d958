use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when a ranking is requested for a game mode that doesn't exist
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct InvalidGameModeDto {
    /// The error message
    pub error: String,
    /// Every game mode identifier the rankings route accepts
    pub valid_modes: Vec<String>,
}
