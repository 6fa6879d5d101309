// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use chrono_tz::Tz;

/// Format an instant as a `YYYY-MM-DD` calendar date in the given timezone.
pub fn format_date<Z: TimeZone>(instant: DateTime<Z>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%Y-%m-%d").to_string()
}

/// Format a second count as `HHh:MMm:SSs`.
///
/// Hours are not wrapped at 24 and widen past two digits when needed.
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}h:{:02}m:{:02}s", hours, minutes, secs)
}

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS` in its own UTC offset.
pub fn format_local_datetime(date: &DateTime<FixedOffset>) -> String {
    date.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Inclusive `start_date`/`end_date` pair sent to the Oura API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    pub start_date: String,
    pub end_date: String,
}

/// Query windows for the three Oura categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindows {
    /// Yesterday through today, shared by activity and sleep
    pub activity: DateWindow,
    pub sleep: DateWindow,
    /// Today only: the score is assigned on waking
    pub sleep_score: DateWindow,
}

impl DateWindows {
    /// Compute the windows for a run at `now`.
    pub fn for_instant(now: DateTime<Utc>, tz: Tz) -> Self {
        let yesterday = format_date(now - Duration::hours(24), tz);
        let today = format_date(now, tz);

        let two_day = DateWindow {
            start_date: yesterday,
            end_date: today.clone(),
        };

        Self {
            activity: two_day.clone(),
            sleep: two_day,
            sleep_score: DateWindow {
                start_date: today.clone(),
                end_date: today,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "00h:00m:00s");
        assert_eq!(format_duration(3661), "01h:01m:01s");
        assert_eq!(format_duration(28800), "08h:00m:00s");
        assert_eq!(format_duration(90000), "25h:00m:00s");
        assert_eq!(format_duration(59), "00h:00m:59s");
        assert_eq!(format_duration(360_000), "100h:00m:00s");
    }

    #[test]
    fn test_format_date_uses_reference_timezone() {
        // 16:30 UTC is already the next day in Tokyo.
        let instant = Utc.with_ymd_and_hms(2024, 3, 9, 16, 30, 0).unwrap();
        assert_eq!(format_date(instant, chrono_tz::Asia::Tokyo), "2024-03-10");
        assert_eq!(format_date(instant, chrono_tz::UTC), "2024-03-09");
    }

    #[test]
    fn test_format_local_datetime_keeps_offset() {
        let date = DateTime::parse_from_rfc3339("2024-03-09T23:41:07+09:00").unwrap();
        assert_eq!(format_local_datetime(&date), "2024-03-09 23:41:07");
    }

    #[test]
    fn test_date_windows() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 30, 0).unwrap();
        let windows = DateWindows::for_instant(now, chrono_tz::Asia::Tokyo);

        // 09:30 JST on Jan 1; 24 hours earlier is Dec 31.
        assert_eq!(windows.activity.start_date, "2023-12-31");
        assert_eq!(windows.activity.end_date, "2024-01-01");
        assert_eq!(windows.sleep, windows.activity);
        assert_eq!(windows.sleep_score.start_date, "2024-01-01");
        assert_eq!(windows.sleep_score.end_date, "2024-01-01");
    }

    #[test]
    fn test_date_windows_across_utc_day_boundary() {
        let tz = chrono_tz::Asia::Tokyo;
        for hour in 0..24 {
            let now = Utc.with_ymd_and_hms(2024, 2, 29, hour, 15, 0).unwrap();
            let windows = DateWindows::for_instant(now, tz);
            assert_eq!(
                windows.activity.start_date,
                format_date(now - Duration::hours(24), tz)
            );
            assert_eq!(windows.sleep_score.start_date, format_date(now, tz));
            assert_eq!(windows.sleep_score.end_date, format_date(now, tz));
        }
    }
}
