//! Time and date formatting helpers

use chrono::{DateTime, Local};

/// Format a number of seconds as `HH:MM:SS`
///
/// Hours are not wrapped at 24, so long countdowns keep counting up.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format an instant as a local `YYYY-MM-DD HH:MM:SS` timestamp
pub fn format_timestamp(instant: &DateTime<Local>) -> String {
    instant.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_durations() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(59), "00:00:59");
        assert_eq!(format_duration(3661), "01:01:01");
        assert_eq!(format_duration(86_400 + 61), "24:01:01");
    }

    #[test]
    fn hours_widen_past_two_digits() {
        assert_eq!(format_duration(100 * 3600), "100:00:00");
    }

    #[test]
    fn timestamp_is_zero_padded() {
        let instant = Local.with_ymd_and_hms(2024, 3, 7, 4, 5, 9).unwrap();
        assert_eq!(format_timestamp(&instant), "2024-03-07 04:05:09");
    }

    #[test]
    fn timestamp_has_fixed_shape() {
        let stamp = format_timestamp(&Local::now());
        assert_eq!(stamp.len(), 19);
        for (i, c) in stamp.chars().enumerate() {
            match i {
                4 | 7 => assert_eq!(c, '-'),
                10 => assert_eq!(c, ' '),
                13 | 16 => assert_eq!(c, ':'),
                _ => assert!(c.is_ascii_digit(), "unexpected {:?} at {}", c, i),
            }
        }
    }
}
