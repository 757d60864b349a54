//! LoginViewController: forwards user actions to the view model.
//!
//! The screen has two actions, both hard-wired for now:
//!
//! ```text
//! view_did_load()
//!  ├─ on_create_user_tapped()  -> create_new_user("test", "123")
//!  └─ on_refresh_tapped()      -> fetch_users().await
//! ```
//!
//! # DTO
//!
//! The view model hands out borrowed domain types, which carry passwords and
//! are not serializable.  [`LoginScreenDto`] is the snapshot the outside world
//! sees: nicknames and counts only.

use serde::Serialize;
use tracing::info;

use crate::application::login_view_model::LoginViewModel;

/// Nickname submitted by the create-user action.
pub const DEMO_NICK: &str = "test";

/// Password submitted by the create-user action.
pub const DEMO_PASSWORD: &str = "123";

/// Serializable snapshot of the login screen state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginScreenDto {
    /// Nickname of the created user, if one was created.
    pub user_nick: Option<String>,
    /// Number of fetched users, or `None` if no fetch has succeeded.
    pub user_count: Option<usize>,
    /// Nicknames of the fetched users, in service order.
    pub user_nicks: Vec<String>,
}

/// Presentation surface for the login screen.
pub struct LoginViewController {
    view_model: Box<dyn LoginViewModel>,
}

impl LoginViewController {
    /// Creates a controller driving `view_model`.
    pub fn new(view_model: Box<dyn LoginViewModel>) -> Self {
        Self { view_model }
    }

    /// Runs both screen actions, as the screen does when it first appears.
    pub async fn view_did_load(&mut self) {
        info!("login screen loaded");
        self.on_create_user_tapped();
        self.on_refresh_tapped().await;
    }

    /// Create-user action.
    pub fn on_create_user_tapped(&mut self) {
        self.view_model.create_new_user(DEMO_NICK, DEMO_PASSWORD);
    }

    /// Refresh action.
    pub async fn on_refresh_tapped(&mut self) {
        self.view_model.fetch_users().await;
    }

    /// Read access to the underlying view model.
    pub fn view_model(&self) -> &dyn LoginViewModel {
        self.view_model.as_ref()
    }

    /// Captures the current screen state.
    pub fn snapshot(&self) -> LoginScreenDto {
        let users = self.view_model.users();
        LoginScreenDto {
            user_nick: self.view_model.user().map(|u| u.nick().to_string()),
            user_count: users.map(<[_]>::len),
            user_nicks: users
                .unwrap_or_default()
                .iter()
                .map(|u| u.nick().to_string())
                .collect(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
