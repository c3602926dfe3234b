//! Time related utils.

use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time as whole seconds since the Unix epoch: "1234567890"
///
/// Sub-second precision is truncated.
pub fn format_unix_timestamp(t: DateTime) -> String {
    t.timestamp().to_string()
}
