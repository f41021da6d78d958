//! Background refresh of live data.

/// Interval between refetches of leaderboard data
pub const REFRESH_INTERVAL_MS: u32 = 30_000;

/// Resolves after one refresh interval.
#[cfg(feature = "web")]
pub async fn wait_for_refresh() {
    gloo_timers::future::TimeoutFuture::new(REFRESH_INTERVAL_MS).await;
}

/// Never resolves, pages rendered outside the browser are not refreshed.
#[cfg(not(feature = "web"))]
pub async fn wait_for_refresh() {
    std::future::pending::<()>().await;
}
