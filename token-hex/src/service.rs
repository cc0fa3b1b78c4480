//! Application service that validates link tokens.

use token_types::{Clock, Secret, SystemClock, VerificationResult};
use token_verifier::TokenVerifier;

/// Validates tokens against the configured secret at the clock's current time.
///
/// Generic over `C: Clock` for dependency injection.
pub struct ValidationService<C: Clock = SystemClock> {
    verifier: TokenVerifier,
    clock: C,
}

impl ValidationService<SystemClock> {
    /// Creates a service backed by the wall clock.
    pub fn new(secret: Secret) -> Self {
        Self::with_clock(secret, SystemClock)
    }
}

impl<C: Clock> ValidationService<C> {
    /// Creates a service with an explicit clock.
    pub fn with_clock(secret: Secret, clock: C) -> Self {
        Self {
            verifier: TokenVerifier::new(secret),
            clock,
        }
    }

    /// Returns a reference to the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Validates a token. The diagnostic is logged here and must not be
    /// forwarded to untrusted callers.
    pub fn validate(&self, token: &str) -> VerificationResult {
        let result = self.verifier.verify(token, self.clock.now());

        if result.valid {
            tracing::info!("validation succeeded: {}", result.message);
        } else {
            tracing::warn!("validation failed: {}", result.message);
        }

        result
    }
}
