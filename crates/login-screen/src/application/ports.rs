//! Ports implemented by the infrastructure layer.
//!
//! Both traits are object-safe (`async-trait`) so consumers can hold them as
//! `Arc<dyn ...>` and tests can substitute fakes.

use async_trait::async_trait;
use login_core::{ServiceError, User};

/// Source of user records.
///
/// A production implementation would call a remote backend; the only
/// implementation shipped here is a stub.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Fetches every known user.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when the backend cannot be reached, does not
    /// answer in time, or answers with data that cannot be decoded.
    async fn fetch_users(&self) -> Result<Vec<User>, ServiceError>;
}

/// Data access for users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Constructs a user from raw fields.  Cannot fail.
    fn create(&self, nick: &str, password: &str) -> User;

    /// Fetches every known user from the underlying service.
    ///
    /// # Errors
    ///
    /// Propagates the service's [`ServiceError`] unchanged.
    async fn fetch_users(&self) -> Result<Vec<User>, ServiceError>;
}
