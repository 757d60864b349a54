//! Presentation layer for the login screen.
//!
//! Only this layer knows about user actions.  It forwards them to the view
//! model and turns the view model's state into [`LoginScreenDto`], a plain
//! serializable snapshot that a renderer (or the CLI) can display.

pub mod login_view_controller;

pub use login_view_controller::{LoginScreenDto, LoginViewController};
