use chrono::{DateTime, Utc};

/// Parses an ISO-8601 timestamp with a UTC offset, e.g.
/// `2019-05-13T16:38:49.599987+00:00` or `2019-05-13T16:38:49Z`.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s.trim()).map(|dt| dt.with_timezone(&Utc))
}

/// Seconds from `from` to `to`, with microsecond resolution.
pub fn seconds_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let delta = to - from;
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1e6,
        None => delta.num_milliseconds() as f64 / 1e3,
    }
}
