//! Date utilities: parsing user-supplied due dates and formatting for display.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};
use std::fmt::Write;

/// Display format used when the configured one cannot be rendered.
pub const DEFAULT_DISPLAY_FORMAT: &str = "%m/%d/%Y %-I:%M %p";

/// Formats accepted for a local date-time, most specific first.
const LOCAL_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Interpret a naive date-time in the local zone.
/// Ambiguous times (DST fold) resolve to the earlier instant; skipped times are `None`.
pub fn local_to_utc(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse a date-time in any of the accepted textual forms:
/// RFC 3339, `YYYY-MM-DD HH:MM[:SS]`, `YYYY-MM-DDTHH:MM[:SS[.fff]]`,
/// or `YYYY-MM-DD` (local midnight). Naive forms are local time.
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in LOCAL_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return local_to_utc(naive);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| local_to_utc(d.and_time(NaiveTime::MIN)))
}

/// `toISOString()`-compatible text: UTC, millisecond precision, `Z` suffix.
pub fn to_iso(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// True when chrono understands every specifier in `fmt`.
pub fn is_valid_format(fmt: &str) -> bool {
    !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}

/// Render a timestamp in local time using a chrono format string.
/// An unusable format falls back to `DEFAULT_DISPLAY_FORMAT`.
pub fn format_local(dt: &DateTime<Utc>, fmt: &str) -> String {
    let local = dt.with_timezone(&Local);
    let mut out = String::new();
    if write!(out, "{}", local.format(fmt)).is_ok() {
        return out;
    }
    local.format(DEFAULT_DISPLAY_FORMAT).to_string()
}
