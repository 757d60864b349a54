//! login-screen library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # How the layers fit together
//!
//! ```text
//! LoginViewController        presentation
//!   └─ LoginViewModel        application
//!        ├─ CreateUserUseCase
//!        └─ FetchUsersUseCase
//!             └─ UserRepository   infrastructure
//!                  └─ UserService
//! ```
//!
//! Every arrow is a trait object injected through a constructor.  The only
//! place that knows which concrete type sits behind each trait is
//! [`composition::CompositionRoot`].

/// Application layer: ports, use cases, and the view model.
pub mod application;

/// Composition root: wires concrete implementations together.
pub mod composition;

/// Infrastructure layer: stub user service, repository, and config storage.
pub mod infrastructure;

/// Presentation layer: the login view controller and its DTO.
pub mod presentation;
