//! Application layer for the login screen.
//!
//! Use cases in this layer depend on abstractions (the traits in [`ports`])
//! rather than concrete implementations, so the infrastructure can be swapped
//! (or faked in tests) without changing this code.  Nothing here touches the
//! file system, the clock, or the network.
//!
//! # Sub-modules
//!
//! - **`ports`** – `UserService` and `UserRepository`, the traits the
//!   infrastructure layer implements.
//!
//! - **`create_user`** – builds a `User` from raw fields.  This is where
//!   domain validation rules would live.
//!
//! - **`fetch_users`** – retrieves the list of users.
//!
//! - **`login_view_model`** – holds the results of both use cases for the
//!   view controller.

pub mod create_user;
pub mod fetch_users;
pub mod login_view_model;
pub mod ports;
