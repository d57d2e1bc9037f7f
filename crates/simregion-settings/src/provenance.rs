//! Formatting of the region's recorded creation time.
//!
//! Creation times are stored as POSIX seconds and rendered as a long date
//! ("Thursday, January 1, 1970") and a long time ("12:00:00 AM") in UTC.

use chrono::{DateTime, TimeDelta, Utc};

/// Instant `seconds` after 1970-01-01T00:00:00 UTC.
pub fn creation_timestamp(seconds: i32) -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + TimeDelta::seconds(i64::from(seconds))
}

/// Long date form, e.g. "Thursday, January 1, 1970".
pub fn format_long_date(stamp: DateTime<Utc>) -> String {
    stamp.format("%A, %B %-d, %Y").to_string()
}

/// Long time form, e.g. "12:00:00 AM".
pub fn format_long_time(stamp: DateTime<Utc>) -> String {
    stamp.format("%-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let stamp = creation_timestamp(0);
        assert_eq!(format_long_date(stamp), "Thursday, January 1, 1970");
        assert_eq!(format_long_time(stamp), "12:00:00 AM");
    }

    #[test]
    fn test_afternoon() {
        // 2001-09-09T01:46:40Z
        let stamp = creation_timestamp(1_000_000_000);
        assert_eq!(format_long_date(stamp), "Sunday, September 9, 2001");
        assert_eq!(format_long_time(stamp), "1:46:40 AM");

        let stamp = creation_timestamp(13 * 3600 + 5 * 60 + 9);
        assert_eq!(format_long_time(stamp), "1:05:09 PM");
    }

    #[test]
    fn test_before_epoch() {
        let stamp = creation_timestamp(-1);
        assert_eq!(format_long_date(stamp), "Wednesday, December 31, 1969");
        assert_eq!(format_long_time(stamp), "11:59:59 PM");
    }

    #[test]
    fn test_i32_extremes() {
        assert_eq!(
            format_long_date(creation_timestamp(i32::MAX)),
            "Tuesday, January 19, 2038"
        );
        assert_eq!(
            format_long_date(creation_timestamp(i32::MIN)),
            "Friday, December 13, 1901"
        );
    }
}
