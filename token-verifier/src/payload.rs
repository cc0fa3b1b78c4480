//! Parsing of the token envelope and of the signed payload.

/// Splits `payload.signature` into its two segments.
///
/// Exactly one dot, both sides non-empty.
pub(crate) fn split_token(token: &str) -> Option<(&str, &str)> {
    let (payload, signature) = token.split_once('.')?;
    if payload.is_empty() || signature.is_empty() || signature.contains('.') {
        return None;
    }
    Some((payload, signature))
}

/// Fields of a decoded payload. Empty fields are reported as absent.
pub(crate) struct PayloadFields<'a> {
    pub user_id: Option<&'a str>,
    pub valid_until: Option<&'a str>,
}

/// Splits `user_id:valid_until`. Anything after a second colon is ignored.
pub(crate) fn split_payload(payload: &str) -> PayloadFields<'_> {
    let mut fields = payload.split(':');
    let user_id = fields.next().filter(|field| !field.is_empty());
    let valid_until = fields.next().filter(|field| !field.is_empty());
    PayloadFields {
        user_id,
        valid_until,
    }
}

/// Outcome of reading an expiry field.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum EpochSeconds {
    Value(i64),
    /// No leading digits at all.
    NotANumber,
    /// Digits present but beyond `i64`.
    Overflow,
}

/// Reads a base-10 integer the lenient way: leading whitespace skipped,
/// optional sign, then the longest run of ASCII digits. Trailing garbage
/// after the digits is ignored.
pub(crate) fn parse_epoch_seconds(raw: &str) -> EpochSeconds {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return EpochSeconds::NotANumber;
    }

    let mut value: i64 = 0;
    for digit in rest[..digits_len].bytes() {
        let digit = i64::from(digit - b'0');
        let next = value.checked_mul(10).and_then(|v| {
            if negative {
                v.checked_sub(digit)
            } else {
                v.checked_add(digit)
            }
        });
        match next {
            Some(next) => value = next,
            None => return EpochSeconds::Overflow,
        }
    }
    EpochSeconds::Value(value)
}
