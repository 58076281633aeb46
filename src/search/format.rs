//! Display formatting for video metadata.
//!
//! Single authoritative implementation of the duration, view-count and
//! relative-time formatting used in search results.

use chrono::{DateTime, Utc};

/// Formats an ISO-8601 duration (`PT1H2M3S`) the way the platform displays
/// it: `1:02:03`, `4:05`, or `0:07`. Returns `None` when the input is not a
/// recognizable duration.
pub fn format_duration(iso: &str) -> Option<String> {
    // A bare "PT" is a zero duration.
    let rest = iso.strip_prefix("PT")?;

    let mut hours: u64 = 0;
    let mut minutes: u64 = 0;
    let mut seconds: u64 = 0;
    let mut digits = String::new();

    for c in rest.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let value: u64 = digits.parse().ok()?;
        digits.clear();
        match c {
            'H' => hours = value,
            'M' => minutes = value,
            'S' => seconds = value,
            _ => return None,
        }
    }
    if !digits.is_empty() {
        return None;
    }

    if hours > 0 {
        Some(format!("{}:{:02}:{:02}", hours, minutes, seconds))
    } else if minutes > 0 {
        Some(format!("{}:{:02}", minutes, seconds))
    } else {
        Some(format!("0:{:02}", seconds))
    }
}

/// Abbreviates a view count: `1.2B`, `3.4M`, `56.7K`, `5K`, `999`.
pub fn format_view_count(view_count: i64) -> String {
    if view_count >= 1_000_000_000 {
        format!("{:.1}B", view_count as f64 / 1_000_000_000.0)
    } else if view_count >= 1_000_000 {
        format!("{:.1}M", view_count as f64 / 1_000_000.0)
    } else if view_count >= 10_000 {
        format!("{:.1}K", view_count as f64 / 1_000.0)
    } else if view_count >= 1_000 {
        format!("{}K", view_count / 1_000)
    } else {
        view_count.to_string()
    }
}

/// Renders an RFC 3339 publish timestamp as a relative display string
/// ("3 weeks ago"). Returns `None` when the timestamp does not parse.
pub fn time_ago(published_at: &str) -> Option<String> {
    let published = DateTime::parse_from_rfc3339(published_at).ok()?;
    Some(time_ago_from(published.with_timezone(&Utc), Utc::now()))
}

fn time_ago_from(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - published).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    let weeks = days / 7;
    let months = (days as f64 / 30.436875) as i64;
    let years = (days as f64 / 365.25) as i64;

    let plural = |n: i64, unit: &str| {
        if n > 1 {
            format!("{} {}s ago", n, unit)
        } else {
            format!("{} {} ago", n, unit)
        }
    };

    if years > 0 {
        plural(years, "year")
    } else if months > 0 {
        plural(months, "month")
    } else if weeks > 0 {
        plural(weeks, "week")
    } else if days > 0 {
        plural(days, "day")
    } else if hours > 0 {
        plural(hours, "hour")
    } else if minutes > 0 {
        plural(minutes, "minute")
    } else if seconds < 5 {
        "just now".to_string()
    } else {
        plural(seconds, "second")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_durations_like_the_platform() {
        assert_eq!(format_duration("PT1H2M3S").as_deref(), Some("1:02:03"));
        assert_eq!(format_duration("PT4M5S").as_deref(), Some("4:05"));
        assert_eq!(format_duration("PT7S").as_deref(), Some("0:07"));
        assert_eq!(format_duration("PT1H").as_deref(), Some("1:00:00"));
        assert_eq!(format_duration("PT10M").as_deref(), Some("10:00"));
        assert_eq!(format_duration("PT").as_deref(), Some("0:00"));
    }

    #[test]
    fn rejects_unrecognizable_durations() {
        assert_eq!(format_duration("P1D"), None);
        assert_eq!(format_duration(""), None);
        assert_eq!(format_duration("1:02"), None);
        assert_eq!(format_duration("PT5"), None);
    }

    #[test]
    fn abbreviates_view_counts() {
        assert_eq!(format_view_count(999), "999");
        assert_eq!(format_view_count(1_500), "1K");
        assert_eq!(format_view_count(12_345), "12.3K");
        assert_eq!(format_view_count(2_500_000), "2.5M");
        assert_eq!(format_view_count(1_200_000_000), "1.2B");
    }

    #[test]
    fn renders_relative_times() {
        let now = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
        let cases = [
            (now - chrono::Duration::seconds(2), "just now"),
            (now - chrono::Duration::seconds(30), "30 seconds ago"),
            (now - chrono::Duration::minutes(5), "5 minutes ago"),
            (now - chrono::Duration::hours(3), "3 hours ago"),
            (now - chrono::Duration::days(2), "2 days ago"),
            (now - chrono::Duration::days(21), "3 weeks ago"),
            (now - chrono::Duration::days(90), "2 months ago"),
            (now - chrono::Duration::days(800), "2 years ago"),
        ];
        for (published, expected) in cases {
            assert_eq!(time_ago_from(published, now), expected);
        }
    }

    #[test]
    fn time_ago_rejects_bad_timestamps() {
        assert_eq!(time_ago("not-a-date"), None);
    }
}
