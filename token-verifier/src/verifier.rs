//! The token verifier.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};

use token_types::{DomainError, Grant, Rejection, Secret, VerificationResult};

use crate::payload::{EpochSeconds, parse_epoch_seconds, split_payload, split_token};
use crate::signature::{compute_mac, signature_matches};

/// Causes that all surface as [`Rejection::Malformed`].
///
/// Kept distinct only for debug logging.
#[derive(Debug, thiserror::Error)]
enum DecodeError {
    #[error("payload segment is not base64url: {0}")]
    Payload(base64::DecodeError),

    #[error("signature segment is not base64url: {0}")]
    Signature(base64::DecodeError),

    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("hmac key rejected: {0}")]
    Key(#[from] hmac::digest::InvalidLength),

    #[error("valid until does not fit in a 64-bit integer")]
    ExpiryOverflow,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<DecodeError> for Rejection {
    fn from(_: DecodeError) -> Self {
        Rejection::Malformed
    }
}

/// Records the decode cause at debug level and collapses it.
fn malformed(err: impl Into<DecodeError>) -> Rejection {
    let err = err.into();
    tracing::debug!(error = %err, "token could not be decoded");
    err.into()
}

/// Verifies link tokens against one shared secret.
///
/// Holds no mutable state; share it freely across threads.
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    secret: Secret,
}

impl TokenVerifier {
    pub fn new(secret: Secret) -> Self {
        Self { secret }
    }

    /// Verifies `token` as of `now` and returns the flattened verdict.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> VerificationResult {
        self.check(token, now).into()
    }

    /// Verifies `token` as of `now`.
    ///
    /// Checks run in order and stop at the first failure: envelope,
    /// base64url decoding, signature, payload fields, expiry.
    pub fn check(&self, token: &str, now: DateTime<Utc>) -> Result<Grant, Rejection> {
        let (encoded_payload, encoded_signature) =
            split_token(token).ok_or(Rejection::InvalidFormat)?;

        let payload = URL_SAFE_NO_PAD
            .decode(encoded_payload)
            .map_err(|err| malformed(DecodeError::Payload(err)))?;
        let signature = URL_SAFE_NO_PAD
            .decode(encoded_signature)
            .map_err(|err| malformed(DecodeError::Signature(err)))?;

        let expected = compute_mac(self.secret.as_bytes(), &payload).map_err(malformed)?;
        if !signature_matches(&expected, &signature) {
            return Err(Rejection::InvalidSignature);
        }

        let payload = String::from_utf8(payload).map_err(malformed)?;
        let fields = split_payload(&payload);
        let user_id = fields.user_id.ok_or(Rejection::MissingUserId)?;
        let valid_until = fields.valid_until.ok_or(Rejection::MissingValidUntil)?;

        let valid_until_sec = match parse_epoch_seconds(valid_until) {
            EpochSeconds::Value(secs) => secs,
            EpochSeconds::NotANumber => {
                return Err(Rejection::InvalidValidUntil {
                    user_id: user_id.to_string(),
                });
            }
            EpochSeconds::Overflow => return Err(malformed(DecodeError::ExpiryOverflow)),
        };

        let grant = Grant::new(user_id, valid_until_sec).map_err(malformed)?;
        if !grant.is_live_at(now) {
            return Err(Rejection::Expired {
                user_id: grant.user_id,
                expired_at: grant.valid_until,
            });
        }

        Ok(grant)
    }
}

/// One-shot verification with an explicit secret.
pub fn verify(token: &str, secret: &Secret, now: DateTime<Utc>) -> VerificationResult {
    TokenVerifier::new(secret.clone()).verify(token, now)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "link-secret";

    fn secret() -> Secret {
        Secret::new(SECRET).unwrap()
    }

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn mint(secret: &str, payload: &str) -> String {
        let sig = compute_mac(secret.as_bytes(), payload.as_bytes()).unwrap();
        format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(payload),
            URL_SAFE_NO_PAD.encode(sig)
        )
    }

    fn check(token: &str, now: i64) -> Result<Grant, Rejection> {
        TokenVerifier::new(secret()).check(token, at(now))
    }

    #[test]
    fn test_valid_token() {
        let token = mint(SECRET, "alice:1700000000");
        let result = verify(&token, &secret(), at(1_699_999_000));

        assert!(result.valid);
        assert_eq!(
            result.message,
            "Token is valid until 2023-11-14T22:13:20.000Z for user alice"
        );
    }

    #[test]
    fn test_grant_carries_subject() {
        let grant = check(&mint(SECRET, "alice:100"), 50).unwrap();
        assert_eq!(grant.user_id, "alice");
        assert_eq!(grant.valid_until, at(100));
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let token = mint(SECRET, "alice:100");
        assert!(check(&token, 100).is_ok());

        let err = check(&token, 101).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Token expired at 1970-01-01T00:01:40.000Z for user alice"
        );
    }

    #[test]
    fn test_subsecond_now_is_floored() {
        let token = mint(SECRET, "alice:100");
        let now = DateTime::from_timestamp(100, 999_999_999).unwrap();
        assert!(TokenVerifier::new(secret()).check(&token, now).is_ok());
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(check("notoken", 0), Err(Rejection::InvalidFormat));
        assert_eq!(check(".", 0), Err(Rejection::InvalidFormat));
        assert_eq!(check("", 0), Err(Rejection::InvalidFormat));
        assert_eq!(check("abc.", 0), Err(Rejection::InvalidFormat));
        assert_eq!(check(".abc", 0), Err(Rejection::InvalidFormat));
    }

    #[test]
    fn test_extra_segment_is_invalid_format() {
        let token = format!("{}.extra", mint(SECRET, "alice:100"));
        assert_eq!(check(&token, 0), Err(Rejection::InvalidFormat));
    }

    #[test]
    fn test_wrong_secret() {
        let token = mint("another-secret", "alice:100");
        assert_eq!(check(&token, 0), Err(Rejection::InvalidSignature));
    }

    #[test]
    fn test_truncated_signature() {
        let payload = URL_SAFE_NO_PAD.encode("alice:100");
        let sig = compute_mac(SECRET.as_bytes(), b"alice:100").unwrap();
        let token = format!("{}.{}", payload, URL_SAFE_NO_PAD.encode(&sig[..16]));
        assert_eq!(check(&token, 0), Err(Rejection::InvalidSignature));
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(check(&mint(SECRET, ":100"), 0), Err(Rejection::MissingUserId));
        assert_eq!(
            check(&mint(SECRET, "alice:"), 0),
            Err(Rejection::MissingValidUntil)
        );
        assert_eq!(
            check(&mint(SECRET, "alice"), 0),
            Err(Rejection::MissingValidUntil)
        );
    }

    #[test]
    fn test_non_numeric_valid_until() {
        let err = check(&mint(SECRET, "alice:notanumber"), 0).unwrap_err();
        assert_eq!(err.to_string(), "Invalid valid until for user alice");
    }

    #[test]
    fn test_bad_base64_is_catch_all() {
        assert_eq!(check("!!!.???", 0), Err(Rejection::Malformed));

        let payload = URL_SAFE_NO_PAD.encode("alice:100");
        assert_eq!(
            check(&format!("{}.*not-base64*", payload), 0),
            Err(Rejection::Malformed)
        );
    }

    #[test]
    fn test_padded_base64_is_catch_all() {
        // "alice:10" encodes with padding under the standard engine
        let token = mint(SECRET, "alice:10");
        let (payload, sig) = token.split_once('.').unwrap();
        let padded = format!("{}=.{}", payload, sig);
        assert_eq!(check(&padded, 0), Err(Rejection::Malformed));
    }

    #[test]
    fn test_non_utf8_payload_is_catch_all() {
        let payload = [0xff, 0xfe, b':', b'1'];
        let sig = compute_mac(SECRET.as_bytes(), &payload).unwrap();
        let token = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(payload),
            URL_SAFE_NO_PAD.encode(sig)
        );
        assert_eq!(check(&token, 0), Err(Rejection::Malformed));
    }

    #[test]
    fn test_unrepresentable_expiry_is_catch_all() {
        assert_eq!(
            check(&mint(SECRET, "alice:99999999999999999999"), 0),
            Err(Rejection::Malformed)
        );
        assert_eq!(
            check(&mint(SECRET, "alice:9223372036854775807"), 0),
            Err(Rejection::Malformed)
        );
    }

    #[test]
    fn test_decode_causes_collapse_to_malformed() {
        let utf8 = String::from_utf8(vec![0xff]).unwrap_err();
        let causes = [
            DecodeError::Utf8(utf8),
            DecodeError::ExpiryOverflow,
            DecodeError::Domain(DomainError::TimestampOutOfRange(i64::MAX)),
        ];
        for cause in causes {
            assert_eq!(Rejection::from(cause), Rejection::Malformed);
        }
        assert_eq!(malformed(DecodeError::ExpiryOverflow), Rejection::Malformed);
    }

    #[test]
    fn test_expanded_year_expiry_message() {
        let grant = check(&mint(SECRET, "alice:253402300800"), 0).unwrap();
        assert_eq!(
            grant.to_string(),
            "Token is valid until +010000-01-01T00:00:00.000Z for user alice"
        );

        let err = check(&mint(SECRET, "alice:-62167219201"), 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Token expired at -000001-12-31T23:59:59.000Z for user alice"
        );
    }

    #[test]
    fn test_lenient_expiry_and_extra_fields() {
        assert!(check(&mint(SECRET, "alice:100abc"), 100).is_ok());
        assert!(check(&mint(SECRET, "alice:100:extra"), 100).is_ok());
        assert!(check(&mint(SECRET, "alice:-1"), 0).is_err());
    }
}
