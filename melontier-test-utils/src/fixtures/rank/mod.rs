//! Player rank fixture utilities.
//!
//! Rank rows are inserted exactly as given: gamemodes and tier labels are not validated, so
//! tests can seed the malformed data the aggregation has to tolerate. Stored `rank_points` are
//! always 0 since scoring reads the tier label.

use crate::TestContext;

pub mod data;
pub mod factory;

impl TestContext {
    pub fn rank<'a>(&'a self) -> RankFixtures<'a> {
        RankFixtures { setup: self }
    }
}

pub struct RankFixtures<'a> {
    pub setup: &'a TestContext,
}
