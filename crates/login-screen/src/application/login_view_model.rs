//! LoginViewModel: holds the state shown by the login screen.
//!
//! The view model owns two optional slots, the most recently created user and
//! the most recently fetched user list, and fills them by running the two use
//! cases.  It is driven from a single presentation context, so mutation goes
//! through `&mut self` and needs no locking.
//!
//! # Fetch failures
//!
//! A failed fetch is discarded: [`LoginViewModel::fetch_users`] returns
//! nothing, the stored list keeps whatever it held before, and no retry is
//! attempted.  All discarded failures pass through [`discard_fetch_error`] so
//! there is exactly one place to change when the screen learns to show errors.

use std::sync::Arc;

use async_trait::async_trait;
use login_core::{ServiceError, User};
use tracing::{debug, info};

use crate::application::create_user::CreateUserUseCase;
use crate::application::fetch_users::FetchUsersUseCase;

/// Presentation-facing state and actions for the login screen.
#[async_trait]
pub trait LoginViewModel: Send {
    /// Creates a user and stores it, replacing any previous one.
    fn create_new_user(&mut self, nick: &str, password: &str);

    /// Fetches users and stores the list on success.
    ///
    /// Failures are swallowed; the stored list is left untouched.
    async fn fetch_users(&mut self);

    /// The most recently created user, if any.
    fn user(&self) -> Option<&User>;

    /// The most recently fetched users, if any fetch has succeeded.
    fn users(&self) -> Option<&[User]>;
}

/// Use-case-backed [`LoginViewModel`].
pub struct DefaultLoginViewModel {
    create_user_use_case: Arc<dyn CreateUserUseCase>,
    fetch_users_use_case: Arc<dyn FetchUsersUseCase>,
    user: Option<User>,
    users: Option<Vec<User>>,
}

impl DefaultLoginViewModel {
    /// Creates a view model with both slots empty.
    pub fn new(
        create_user_use_case: Arc<dyn CreateUserUseCase>,
        fetch_users_use_case: Arc<dyn FetchUsersUseCase>,
    ) -> Self {
        Self {
            create_user_use_case,
            fetch_users_use_case,
            user: None,
            users: None,
        }
    }
}

#[async_trait]
impl LoginViewModel for DefaultLoginViewModel {
    fn create_new_user(&mut self, nick: &str, password: &str) {
        self.user = Some(self.create_user_use_case.execute(nick, password));
    }

    async fn fetch_users(&mut self) {
        match self.fetch_users_use_case.execute().await {
            Ok(users) => {
                info!(count = users.len(), "users fetched");
                self.users = Some(users);
            }
            Err(e) => discard_fetch_error(&e),
        }
    }

    fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    fn users(&self) -> Option<&[User]> {
        self.users.as_deref()
    }
}

/// Drops a fetch failure without surfacing it to the user.
///
/// The debug event is for diagnostics only.
fn discard_fetch_error(error: &ServiceError) {
    debug!(kind = error.kind(), %error, "user fetch failed; keeping previous list");
}

// ── Tests ─────────────────────────────────────────────────────────────────────
