use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::fmt::Write;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ElapsedTimeFormatter {
    pub boot: DateTime<Utc>,
}

impl ElapsedTimeFormatter {
    pub fn new(boot: DateTime<Utc>) -> Self {
        Self { boot }
    }

    pub fn format(&self, t: DateTime<Utc>) -> String {
        format_elapsed(t - self.boot)
    }
}

/// `[H:]MM:SS[.mmm]`, with a leading `-` for negative durations.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_ms = elapsed.num_milliseconds().unsigned_abs();
    let hours = total_ms / 3_600_000;
    let minutes = total_ms / 60_000 % 60;
    let seconds = total_ms / 1_000 % 60;
    let millis = total_ms % 1_000;

    let mut label = String::new();
    if elapsed < Duration::zero() && total_ms > 0 {
        label.push('-');
    }
    if hours > 0 {
        let _ = write!(label, "{}:", hours);
    }
    let _ = write!(label, "{:02}:{:02}", minutes, seconds);
    if millis > 0 {
        let _ = write!(label, ".{:03}", millis);
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::parse_timestamp;

    #[test]
    fn minutes_and_seconds_are_zero_padded() {
        assert_eq!(format_elapsed(Duration::seconds(65)), "01:05");
        assert_eq!(format_elapsed(Duration::zero()), "00:00");
    }

    #[test]
    fn hours_only_when_present() {
        assert_eq!(format_elapsed(Duration::milliseconds(3_723_500)), "1:02:03.500");
        assert_eq!(format_elapsed(Duration::hours(12)), "12:00:00");
    }

    #[test]
    fn millis_only_when_present() {
        assert_eq!(format_elapsed(Duration::milliseconds(5_007)), "00:05.007");
    }

    #[test]
    fn before_boot_is_negative() {
        assert_eq!(format_elapsed(Duration::milliseconds(-1_250)), "-00:01.250");
        assert_eq!(format_elapsed(Duration::microseconds(-10)), "00:00");
    }

    #[test]
    fn sub_millisecond_part_is_truncated() {
        assert_eq!(format_elapsed(Duration::microseconds(1_999_900)), "00:01.999");
        assert_eq!(format_elapsed(Duration::microseconds(-1_999_900)), "-00:01.999");
    }

    #[test]
    fn relative_to_boot() {
        let boot = parse_timestamp("2019-05-13T16:23:10.778107+00:00").unwrap();
        let start = parse_timestamp("2019-05-13T16:38:49.599987+00:00").unwrap();
        assert_eq!(ElapsedTimeFormatter::new(boot).format(start), "15:38.821");
    }
}
