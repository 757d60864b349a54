//! FetchUsersUseCase: retrieves users through the repository.

use std::sync::Arc;

use async_trait::async_trait;
use login_core::{ServiceError, User};
use tracing::debug;

use crate::application::ports::UserRepository;

/// Business action: retrieve every known user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FetchUsersUseCase: Send + Sync {
    /// Returns the fetched users.
    ///
    /// # Errors
    ///
    /// Propagates the repository's [`ServiceError`] unchanged.
    async fn execute(&self) -> Result<Vec<User>, ServiceError>;
}

/// Repository-backed [`FetchUsersUseCase`].
pub struct DefaultFetchUsersUseCase {
    repository: Arc<dyn UserRepository>,
}

impl DefaultFetchUsersUseCase {
    /// Creates the use case over the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl FetchUsersUseCase for DefaultFetchUsersUseCase {
    async fn execute(&self) -> Result<Vec<User>, ServiceError> {
        debug!("fetching users");
        self.repository.fetch_users().await
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
