//! Error types for the token verifier.

/// Domain-level errors (invalid construction of domain values).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Token secret must not be empty")]
    EmptySecret,

    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),
}
