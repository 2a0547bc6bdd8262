//! Stock string-to-value parsers for filter registration.
//!
//! All parsers are culture-invariant and return `None` on failure,
//! matching the filter map's silently-ignore policy. Date/time inputs
//! are interpreted as UTC when no offset is given; callers wanting a
//! different normalization should register their own parser.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

/// Parse a UUID in any format `uuid` accepts (hyphenated, simple, urn).
pub fn parse_uuid(input: &str) -> Option<Uuid> {
    Uuid::parse_str(input.trim()).ok()
}

/// Parse a 32-bit signed integer.
pub fn parse_i32(input: &str) -> Option<i32> {
    input.trim().parse().ok()
}

/// Parse a 64-bit signed integer.
pub fn parse_i64(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// Parse a 64-bit float.
pub fn parse_f64(input: &str) -> Option<f64> {
    input.trim().parse().ok()
}

/// Parse a boolean: `true`/`false`/`1`/`0`, case-insensitive.
pub fn parse_bool(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Parse a UTC timestamp. Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS`,
/// `YYYY-MM-DD HH:MM:SS`, or a bare date (taken as UTC midnight).
pub fn parse_datetime(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt.and_utc());
        }
    }
    parse_date(input).map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Parse a bare `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}
