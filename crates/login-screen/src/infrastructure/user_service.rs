//! Stub user service.
//!
//! # Why a stub?
//!
//! There is no backend behind the login screen yet.  `StubUserService` plays
//! its part: it waits for a fixed delay to mimic network latency, then
//! returns two users whose fields are empty strings.  It never fails.
//!
//! The wait uses `tokio::time::sleep`, which suspends the task instead of
//! blocking the runtime thread, so other tasks keep running in the meantime.

use std::time::Duration;

use async_trait::async_trait;
use login_core::{ServiceError, User};
use tracing::debug;

use crate::application::ports::UserService;

/// Delay used when none is configured.
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_secs(2);

/// Number of users the stub returns.
const STUB_USER_COUNT: usize = 2;

/// A [`UserService`] that returns fixed data after a fixed delay.
#[derive(Debug, Clone)]
pub struct StubUserService {
    delay: Duration,
}

impl StubUserService {
    /// Creates a stub that waits `delay` before every fetch.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The simulated latency.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for StubUserService {
    fn default() -> Self {
        Self::new(DEFAULT_FETCH_DELAY)
    }
}

#[async_trait]
impl UserService for StubUserService {
    async fn fetch_users(&self) -> Result<Vec<User>, ServiceError> {
        debug!(delay_ms = self.delay.as_millis() as u64, "stub service waiting");
        tokio::time::sleep(self.delay).await;

        let users = (0..STUB_USER_COUNT).map(|_| User::new("", "")).collect();
        debug!(count = STUB_USER_COUNT, "stub service returning users");
        Ok(users)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    #[test]
    fn test_default_delay_is_two_seconds() {
        assert_eq!(StubUserService::default().delay(), Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_fetch_users_returns_two_blank_users() {
        // Arrange
        let service = StubUserService::new(Duration::ZERO);

        // Act
        let users = assert_ok!(service.fetch_users().await);

        // Assert
        assert_eq!(users, vec![User::new("", ""), User::new("", "")]);
    }

    #[tokio::test]
    async fn test_fetch_users_is_stable_across_calls() {
        let service = StubUserService::new(Duration::ZERO);

        let first = assert_ok!(service.fetch_users().await);
        let second = assert_ok!(service.fetch_users().await);

        assert_eq!(first, second);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_users_waits_for_configured_delay() {
        // Arrange
        let service = StubUserService::new(Duration::from_millis(750));
        let start = tokio::time::Instant::now();

        // Act
        let users = assert_ok!(service.fetch_users().await);

        // Assert
        assert!(start.elapsed() >= Duration::from_millis(750));
        assert_eq!(users.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_users_suspends_instead_of_blocking_the_runtime() {
        // Arrange: run the fetch as its own task on the current-thread runtime.
        let service = StubUserService::new(Duration::from_secs(2));
        let fetch = tokio::spawn(async move { service.fetch_users().await });

        // Act: this sleep yields, letting the fetch task start its wait.
        tokio::time::sleep(Duration::from_millis(10)).await;

        // Assert: a blocking wait would have run the fetch to completion
        // before control came back here.
        assert!(
            !fetch.is_finished(),
            "fetch must still be pending 10ms into a 2s delay"
        );
        let users = assert_ok!(fetch.await.expect("fetch task must not panic"));
        assert_eq!(users.len(), 2);
    }
}
