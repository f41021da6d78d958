//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, verifying status codes, response bodies
//! and error mapping for every API endpoint.

mod player;
mod ranking;
mod stats;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use melontier::model::player::PlayerDto;
use melontier_test_utils::prelude::*;

use crate::util::{json_body, TestContextExt};

/// Builds a context holding three players with overlapping game modes.
async fn seeded() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_rank_tables()
        .with_player("1", "Marlowww", Some("NA"), &[("pot", "HT1"), ("sword", "LT3")])
        .with_player("2", "Swight", Some("EU"), &[("sword", "HT1"), ("axe", "HT2")])
        .with_player("3", "Coldified", Some("EU"), &[("sword", "LT3")])
        .build()
        .await
}
