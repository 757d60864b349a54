//! Repository that builds users locally and fetches them from a service.

use std::sync::Arc;

use async_trait::async_trait;
use login_core::{ServiceError, User};

use crate::application::ports::{UserRepository, UserService};

/// Default [`UserRepository`]: `create` is local, `fetch_users` goes to the
/// injected [`UserService`].
pub struct DefaultUserRepository {
    service: Arc<dyn UserService>,
}

impl DefaultUserRepository {
    /// Creates a repository that fetches through `service`.
    pub fn new(service: Arc<dyn UserService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UserRepository for DefaultUserRepository {
    fn create(&self, nick: &str, password: &str) -> User {
        User::new(nick, password)
    }

    async fn fetch_users(&self) -> Result<Vec<User>, ServiceError> {
        self.service.fetch_users().await
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
