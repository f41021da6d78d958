//! Helpers shared by the HTTP-level tests.

use axum::{body::to_bytes, response::Response};
use melontier::server::model::app::AppState;
use melontier_test_utils::TestContext;
use serde::de::DeserializeOwned;

/// Extension trait for TestContext to create the application state
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }
}

/// Reads and deserializes a JSON response body
pub async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");

    serde_json::from_slice(&bytes).expect("response body is not the expected JSON")
}
