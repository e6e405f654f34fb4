//! Time related utils.
//!
//! All signing code takes a [`DateTime`] argument instead of reading the clock,
//! [`now`] is only meant for callers that want to sign with the current time.

use crate::{Error, Result};
use chrono::Utc;

/// DateTime is the UTC timestamp used across signing.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Create a datetime from seconds since the unix epoch.
pub fn from_unix_timestamp(secs: i64) -> Result<DateTime> {
    chrono::DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| Error::request_invalid(format!("timestamp {secs} is out of range")))
}

/// Format time into date: `20220301`
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format time into ISO8601: `20220313T072004Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}
