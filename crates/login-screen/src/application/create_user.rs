//! CreateUserUseCase: builds a new `User` through the repository.

use std::sync::Arc;

use login_core::User;
use tracing::debug;

use crate::application::ports::UserRepository;

/// Business action: create a user from a nickname and a password.
#[cfg_attr(test, mockall::automock)]
pub trait CreateUserUseCase: Send + Sync {
    /// Returns the newly created user.  Cannot fail.
    fn execute(&self, nick: &str, password: &str) -> User;
}

/// Repository-backed [`CreateUserUseCase`].
pub struct DefaultCreateUserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl DefaultCreateUserUseCase {
    /// Creates the use case over the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

impl CreateUserUseCase for DefaultCreateUserUseCase {
    fn execute(&self, nick: &str, password: &str) -> User {
        // Domain rules (non-empty nick, password policy) belong here.  None
        // are enforced yet, so every input is accepted as-is.
        debug!(nick, "creating user");
        self.repository.create(nick, password)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
