//! Infrastructure layer for the login screen.
//!
//! Contains the concrete adapters behind the application ports and the
//! on-disk configuration.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `login_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`user_service`** – `StubUserService`, a stand-in for a remote backend
//!   that waits a fixed delay and returns two blank users.
//!
//! - **`user_repository`** – `DefaultUserRepository`, which builds users
//!   locally and forwards fetches to the injected service.
//!
//! - **`storage`** – TOML configuration file persistence.

pub mod storage;
pub mod user_repository;
pub mod user_service;
