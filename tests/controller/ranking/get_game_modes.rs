//! Tests for the get_game_modes endpoint.

use melontier::{
    model::{player::GameModeDto, tier::GameMode},
    server::controller::ranking::get_game_modes,
};

use super::*;

/// Tests listing the ranked game modes.
///
/// Expected: 200 OK with every mode except overall
#[tokio::test]
async fn lists_ranked_modes() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get_game_modes(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let modes: Vec<GameModeDto> = json_body(resp).await;
    assert_eq!(modes.len(), 9);
    assert!(modes.iter().all(|mode| mode.id != GameMode::Overall));
    assert!(modes
        .iter()
        .any(|mode| mode.id == GameMode::Nethop && mode.name == "NethOP"));

    Ok(())
}
