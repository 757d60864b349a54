//! Composition root: the one place that picks concrete implementations.
//!
//! [`CompositionRoot`] is built once in `main` from the loaded [`AppConfig`]
//! and passed down explicitly; there is no global instance.  Every `build_*`
//! call constructs a fresh object graph, leaf first, and wires it by
//! constructor injection.  Nothing is cached, so two calls never share
//! instances.
//!
//! ```text
//! build_login_view_controller
//!  └─ build_login_view_model
//!       ├─ build_create_user_use_case ─┐
//!       └─ build_fetch_users_use_case ─┴─ build_user_repository
//!                                            └─ build_user_service
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::application::create_user::{CreateUserUseCase, DefaultCreateUserUseCase};
use crate::application::fetch_users::{DefaultFetchUsersUseCase, FetchUsersUseCase};
use crate::application::login_view_model::{DefaultLoginViewModel, LoginViewModel};
use crate::application::ports::{UserRepository, UserService};
use crate::infrastructure::storage::config::AppConfig;
use crate::infrastructure::user_repository::DefaultUserRepository;
use crate::infrastructure::user_service::StubUserService;
use crate::presentation::LoginViewController;

/// Factory for every component of the login screen.
#[derive(Debug, Clone, Default)]
pub struct CompositionRoot {
    config: AppConfig,
}

impl CompositionRoot {
    /// Creates a root that builds components from `config`.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Builds the stub user service with the configured delay.
    pub fn build_user_service(&self) -> Arc<dyn UserService> {
        debug!(
            delay_ms = self.config.service.fetch_delay_ms,
            "building stub user service"
        );
        Arc::new(StubUserService::new(self.config.service.fetch_delay()))
    }

    /// Builds a repository over a fresh user service.
    pub fn build_user_repository(&self) -> Arc<dyn UserRepository> {
        Arc::new(DefaultUserRepository::new(self.build_user_service()))
    }

    /// Builds the create-user use case over a fresh repository.
    pub fn build_create_user_use_case(&self) -> Arc<dyn CreateUserUseCase> {
        Arc::new(DefaultCreateUserUseCase::new(self.build_user_repository()))
    }

    /// Builds the fetch-users use case over a fresh repository.
    pub fn build_fetch_users_use_case(&self) -> Arc<dyn FetchUsersUseCase> {
        Arc::new(DefaultFetchUsersUseCase::new(self.build_user_repository()))
    }

    /// Builds a view model with empty slots over fresh use cases.
    pub fn build_login_view_model(&self) -> Box<dyn LoginViewModel> {
        Box::new(DefaultLoginViewModel::new(
            self.build_create_user_use_case(),
            self.build_fetch_users_use_case(),
        ))
    }

    /// Builds the login view controller over a fresh view model.
    pub fn build_login_view_controller(&self) -> LoginViewController {
        LoginViewController::new(self.build_login_view_model())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use login_core::User;
    use tokio_test::assert_ok;

    fn instant_root() -> CompositionRoot {
        let mut config = AppConfig::default();
        config.service.fetch_delay_ms = 0;
        CompositionRoot::new(config)
    }

    #[tokio::test]
    async fn test_built_service_returns_stub_users() {
        let service = instant_root().build_user_service();
        let users = assert_ok!(service.fetch_users().await);
        assert_eq!(users.len(), 2);
    }

    #[test]
    fn test_successive_repositories_are_independent_instances() {
        let root = instant_root();

        let first = root.build_user_repository();
        let second = root.build_user_repository();

        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_successive_services_are_independent_instances() {
        let root = instant_root();
        assert!(!Arc::ptr_eq(
            &root.build_user_service(),
            &root.build_user_service()
        ));
    }

    #[tokio::test]
    async fn test_built_repository_is_fully_wired() {
        let repository = instant_root().build_user_repository();

        assert_eq!(repository.create("n", "p"), User::new("n", "p"));
        let users = assert_ok!(repository.fetch_users().await);
        assert_eq!(users, vec![User::new("", ""), User::new("", "")]);
    }

    #[tokio::test]
    async fn test_built_use_cases_are_fully_wired() {
        let root = instant_root();

        let created = root.build_create_user_use_case().execute("test", "123");
        let fetched = assert_ok!(root.build_fetch_users_use_case().execute().await);

        assert_eq!(created, User::new("test", "123"));
        assert_eq!(fetched.len(), 2);
    }

    #[tokio::test]
    async fn test_built_view_model_starts_empty_and_fills_on_fetch() {
        let mut vm = instant_root().build_login_view_model();
        assert!(vm.users().is_none());

        vm.fetch_users().await;

        assert_eq!(vm.users().map(<[_]>::len), Some(2));
    }
}
