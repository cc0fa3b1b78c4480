//! # Token Verifier
//!
//! Decides whether a link token is authentic and unexpired.
//!
//! A token is `base64url(payload) + "." + base64url(signature)` where the
//! payload reads `{user_id}:{valid_until_epoch_seconds}` and the signature is
//! HMAC-SHA256 of the payload bytes under the shared secret.
//!
//! Verification is pure: it reads only the token, the secret and the
//! instant supplied by the caller, and never panics on hostile input.

mod payload;
mod signature;
mod verifier;

pub use verifier::{TokenVerifier, verify};
