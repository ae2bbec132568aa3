use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Formats the server and `<input type="datetime-local">` produce.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp into its own wall-clock time.
///
/// Offsets are honoured for parsing but not converted to local time.
pub(crate) fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `Jan 5, 2025, 02:30 PM`. Unparseable input is returned as-is.
pub(crate) fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => raw.to_string(),
    }
}

/// `02:30 PM`. Unparseable input is returned as-is.
pub(crate) fn format_time(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%I:%M %p").to_string(),
        None => raw.to_string(),
    }
}
