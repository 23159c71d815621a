//! Duration parsing and formatting.

use chrono::Duration;

/// Format whole seconds as `HH:MM:SS`.
///
/// Hours are zero-padded to two digits but never capped, so 100 hours renders
/// as `100:00:00` instead of wrapping.
#[must_use]
pub fn format_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Format a duration as a human-readable string, e.g. `1 hour, 5 minutes`.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total = d.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(plural(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(plural(minutes, "minute"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(plural(seconds, "second"));
    }
    parts.join(", ")
}

fn plural(n: i64, unit: &str) -> String {
    format!("{} {}{}", n, unit, if n == 1 { "" } else { "s" })
}

/// Parse a duration string like "25m", "1h30m", "90s".
///
/// A bare number (or a trailing number without unit) is read as minutes.
/// Values too large for a [`Duration`] are rejected.
#[must_use]
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim().to_lowercase();

    if let Ok(minutes) = s.parse::<i64>() {
        return if minutes > 0 {
            Duration::try_minutes(minutes)
        } else {
            None
        };
    }

    let mut total_seconds: i64 = 0;
    let mut current_num = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
        } else if c.is_whitespace() {
            continue;
        } else {
            if current_num.is_empty() {
                return None;
            }
            let num: i64 = current_num.parse().ok()?;
            current_num.clear();

            let unit = match c {
                'h' => 3600,
                'm' => 60,
                's' => 1,
                _ => return None,
            };
            total_seconds = total_seconds.checked_add(num.checked_mul(unit)?)?;
        }
    }

    if !current_num.is_empty() {
        let num: i64 = current_num.parse().ok()?;
        total_seconds = total_seconds.checked_add(num.checked_mul(60)?)?;
    }

    if total_seconds > 0 {
        Duration::try_seconds(total_seconds)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00:00");
        assert_eq!(format_time(59), "00:00:59");
        assert_eq!(format_time(3661), "01:01:01");
        assert_eq!(format_time(86_399), "23:59:59");
    }

    #[test]
    fn test_format_time_no_hour_cap() {
        assert_eq!(format_time(360_000), "100:00:00");
        assert_eq!(format_time(360_000 * 10 + 5), "1000:00:05");
    }

    #[test]
    fn test_parse_duration_minutes() {
        assert_eq!(parse_duration("25"), Some(Duration::minutes(25)));
        assert_eq!(parse_duration("25m"), Some(Duration::minutes(25)));
    }

    #[test]
    fn test_parse_duration_mixed() {
        assert_eq!(parse_duration("1h30m"), Some(Duration::minutes(90)));
        assert_eq!(parse_duration("2m10s"), Some(Duration::seconds(130)));
        assert_eq!(parse_duration("1h 5m"), Some(Duration::minutes(65)));
        assert_eq!(parse_duration("1h5"), Some(Duration::minutes(65)));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration("").is_none());
        assert!(parse_duration("abc").is_none());
        assert!(parse_duration("0").is_none());
        assert!(parse_duration("10x").is_none());
        assert!(parse_duration("m").is_none());
    }

    #[test]
    fn test_parse_duration_overflow() {
        assert!(parse_duration("9999999999999999h").is_none());
        assert!(parse_duration("99999999999999999").is_none());
        assert!(parse_duration("99999999999999999999s").is_none());
        assert!(parse_duration("9000000000000000000s 9000000000000000000s").is_none());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::seconds(0)), "0 seconds");
        assert_eq!(format_duration(Duration::seconds(1)), "1 second");
        assert_eq!(format_duration(Duration::seconds(26)), "26 seconds");
        assert_eq!(format_duration(Duration::minutes(90)), "1 hour, 30 minutes");
        assert_eq!(format_duration(Duration::seconds(130)), "2 minutes, 10 seconds");
        assert_eq!(format_duration(Duration::hours(2)), "2 hours");
    }
}
