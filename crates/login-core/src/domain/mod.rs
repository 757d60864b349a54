//! Domain entities for the login screen.
//!
//! Pure data with no infrastructure dependencies.  Code in outer layers
//! (application, infrastructure, presentation) depends on these types, but
//! this module never depends on them.

/// Failure taxonomy for user retrieval.
pub mod error;

/// The `User` entity.
pub mod user;
