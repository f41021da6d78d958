//! Test utilities for the MelonTier workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and fixtures a test
//! needs, and `build()` returns a [`TestContext`] holding an in-memory SQLite database with
//! everything inserted. Fixture helpers on the context insert more data during the test.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::rank::factory, TestBuilder, TestContext, TestError};
}
