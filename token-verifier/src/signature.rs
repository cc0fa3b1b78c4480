//! HMAC-SHA256 signing primitive and constant-time signature comparison.

use hmac::{Hmac, Mac, digest::InvalidLength};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Computes the raw HMAC-SHA256 of `payload` under `secret`.
pub(crate) fn compute_mac(secret: &[u8], payload: &[u8]) -> Result<Vec<u8>, InvalidLength> {
    let mut mac = HmacSha256::new_from_slice(secret)?;
    mac.update(payload);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Compares a presented signature to the expected MAC.
///
/// Lengths are compared first; the byte comparison itself runs in constant
/// time.
pub(crate) fn signature_matches(expected: &[u8], presented: &[u8]) -> bool {
    if expected.len() != presented.len() {
        return false;
    }
    expected.ct_eq(presented).into()
}
