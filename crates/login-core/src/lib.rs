//! # login-core
//!
//! Shared domain types for the login screen: the `User` entity and the
//! failure taxonomy that travels up from the user service.
//!
//! This crate has zero dependencies on async runtimes, file systems, or any
//! presentation layer.  Every other layer depends on it; it depends on none
//! of them.
//!
//! # Layering overview
//!
//! ```text
//! view controller → view model → use case → repository → service
//! ```
//!
//! Results flow back along the same path.  Only the types that every layer
//! has to agree on live here:
//!
//! - **`domain::user`** – the immutable `User` record.
//! - **`domain::error`** – `ServiceError`, the single failure category a
//!   user fetch can produce.

pub mod domain;

pub use domain::error::ServiceError;
pub use domain::user::User;
