//! Failure taxonomy for user retrieval.
//!
//! `ServiceError` is the only error category in the system.  It originates in
//! the user service, passes unchanged through the repository and the fetch
//! use case, and stops at the view model.
//!
//! # Known gap
//!
//! The view model discards every `ServiceError` without notifying the user
//! and without retrying.  The variants below exist so the discarded failure at
//! least has a name; nothing upstream of the view model branches on them yet.
//! The stub service never produces any of them.

use std::time::Duration;

use thiserror::Error;

/// Error returned when users cannot be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The backing connection could not be reached.
    #[error("connectivity error: {0}")]
    Connectivity(String),

    /// The request did not complete within the allowed time.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The response arrived but could not be decoded into users.
    #[error("malformed user data: {0}")]
    MalformedData(String),
}

impl ServiceError {
    /// Short, stable label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connectivity(_) => "connectivity",
            Self::Timeout(_) => "timeout",
            Self::MalformedData(_) => "malformed_data",
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels_are_distinct() {
        let kinds = [
            ServiceError::Connectivity("down".into()).kind(),
            ServiceError::Timeout(Duration::from_secs(1)).kind(),
            ServiceError::MalformedData("bad".into()).kind(),
        ];
        assert_eq!(kinds, ["connectivity", "timeout", "malformed_data"]);
    }

    #[test]
    fn test_display_includes_detail() {
        let err = ServiceError::Connectivity("host unreachable".into());
        assert_eq!(err.to_string(), "connectivity error: host unreachable");
    }

    #[test]
    fn test_timeout_display_includes_duration() {
        let err = ServiceError::Timeout(Duration::from_millis(1500));
        assert_eq!(err.to_string(), "request timed out after 1.5s");
    }
}
