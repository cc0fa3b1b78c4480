//! Verification outcomes.
//!
//! `Rejection` keeps the failure kinds apart for server-side diagnostics;
//! `VerificationResult` is the flattened `{valid, message}` verdict handed
//! to hosts.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::grant::{Grant, format_utc};

/// Why a token was refused. `Display` yields the diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Invalid token format")]
    InvalidFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("User ID is missing")]
    MissingUserId,

    #[error("Valid until is missing")]
    MissingValidUntil,

    #[error("Invalid valid until for user {user_id}")]
    InvalidValidUntil { user_id: String },

    #[error("Token expired at {} for user {user_id}", format_utc(.expired_at))]
    Expired {
        user_id: String,
        expired_at: DateTime<Utc>,
    },

    /// Catch-all for undecodable input.
    #[error("Error validating token")]
    Malformed,
}

/// The verdict returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationResult {
    pub valid: bool,
    pub message: String,
}

impl VerificationResult {
    pub fn accepted(grant: &Grant) -> Self {
        Self {
            valid: true,
            message: grant.to_string(),
        }
    }

    pub fn rejected(rejection: &Rejection) -> Self {
        Self {
            valid: false,
            message: rejection.to_string(),
        }
    }
}

impl From<Result<Grant, Rejection>> for VerificationResult {
    fn from(outcome: Result<Grant, Rejection>) -> Self {
        match outcome {
            Ok(grant) => Self::accepted(&grant),
            Err(rejection) => Self::rejected(&rejection),
        }
    }
}
