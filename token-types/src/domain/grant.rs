//! Successful verification outcome.

use chrono::{DateTime, Datelike, SecondsFormat, Utc};

use crate::error::DomainError;

/// Renders a timestamp as ISO-8601 UTC with millisecond precision,
/// e.g. `2024-01-01T00:00:00.000Z`.
///
/// Years outside `0..=9999` use the expanded form with a sign and six
/// digits, e.g. `+010000-01-01T00:00:00.000Z`.
pub fn format_utc(at: &DateTime<Utc>) -> String {
    let year = at.year();
    if (0..=9999).contains(&year) {
        return at.to_rfc3339_opts(SecondsFormat::Millis, true);
    }
    let sign = if year < 0 { '-' } else { '+' };
    format!(
        "{}{:06}-{}",
        sign,
        year.unsigned_abs(),
        at.format("%m-%dT%H:%M:%S%.3fZ")
    )
}

/// An authenticated, unexpired token: the subject and its expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    pub user_id: String,
    pub valid_until: DateTime<Utc>,
}

impl Grant {
    /// Builds a grant from an expiry in seconds since the epoch.
    pub fn new(user_id: impl Into<String>, valid_until_sec: i64) -> Result<Self, DomainError> {
        let valid_until = DateTime::from_timestamp(valid_until_sec, 0)
            .ok_or(DomainError::TimestampOutOfRange(valid_until_sec))?;
        Ok(Self {
            user_id: user_id.into(),
            valid_until,
        })
    }

    /// Expiry is inclusive of the boundary second.
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() <= self.valid_until.timestamp()
    }
}

impl std::fmt::Display for Grant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token is valid until {} for user {}",
            format_utc(&self.valid_until),
            self.user_id
        )
    }
}
