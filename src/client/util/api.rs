//! Client requests to the JSON API.
//!
//! Every request resolves to `Err` with a printable message on transport, status or decoding
//! failures. A 404 on a single-resource request resolves to `Ok(None)`.

use crate::model::{
    player::{PlayerCountDto, PlayerDto},
    tier::GameMode,
};

/// Leaderboard of a game mode, `Overall` for the total points leaderboard
pub async fn get_rankings(mode: GameMode) -> Result<Vec<PlayerDto>, String> {
    let players = get_json::<Vec<PlayerDto>>(&format!("/api/rankings/{}", mode.id())).await?;

    Ok(players.unwrap_or_default())
}

/// Players whose username contains `query`
pub async fn search_players(query: &str) -> Result<Vec<PlayerDto>, String> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let url = format!("/api/players/search/{}", encode_path_segment(query));
    let players = get_json::<Vec<PlayerDto>>(&url).await?;

    Ok(players.unwrap_or_default())
}

pub async fn get_player(id: &str) -> Result<Option<PlayerDto>, String> {
    get_json::<PlayerDto>(&format!("/api/players/{}", encode_path_segment(id))).await
}

pub async fn get_player_count() -> Result<u64, String> {
    let count = get_json::<PlayerCountDto>("/api/stats/player-count").await?;

    Ok(count.map(|count| count.count).unwrap_or(0))
}

#[cfg(feature = "web")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<Option<T>, String> {
    use reqwasm::http::Request;

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => {
            let body = response
                .json::<T>()
                .await
                .map_err(|e| format!("Failed to parse response from {}: {}", url, e))?;
            Ok(Some(body))
        }
        404 => Ok(None),
        _ => {
            use crate::model::api::ErrorDto;

            if let Ok(error_dto) = response.json::<ErrorDto>().await {
                Err(format!(
                    "Request failed with status {}: {}",
                    response.status(),
                    error_dto.error
                ))
            } else {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(format!(
                    "Request failed with status {}: {}",
                    response.status(),
                    error_text
                ))
            }
        }
    }
}

/// Server-side render never resolves data requests, pages render their loading state.
#[cfg(not(feature = "web"))]
async fn get_json<T>(_url: &str) -> Result<Option<T>, String> {
    std::future::pending().await
}

/// Percent-encodes everything outside the unreserved URL characters.
fn encode_path_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
