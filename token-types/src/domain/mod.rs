//! Domain models for the token verifier.

pub mod grant;
pub mod secret;
pub mod verification;

pub use grant::{Grant, format_utc};
pub use secret::Secret;
pub use verification::{Rejection, VerificationResult};
