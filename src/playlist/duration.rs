/// Parse a colon-separated duration label into whole seconds
///
/// The rightmost segment is seconds, the next one minutes, then hours, so
/// both "MM:SS" and "HH:MM:SS" labels work. A missing label, an empty
/// string, or a segment that is not a number contributes 0 instead of
/// poisoning the sum; this function never fails.
///
/// ```
/// use pod_progress::playlist::parse_duration;
///
/// assert_eq!(parse_duration(Some("04:30")), 270);
/// assert_eq!(parse_duration(Some("1:05:30")), 3930);
/// assert_eq!(parse_duration(None), 0);
/// ```
pub fn parse_duration(label: Option<&str>) -> u64 {
    let Some(label) = label else { return 0 };

    label
        .split(':')
        .rev()
        .enumerate()
        .map(|(i, segment)| {
            let value = segment.trim().parse::<u64>().unwrap_or(0);
            value.saturating_mul(60u64.saturating_pow(i as u32))
        })
        .fold(0u64, u64::saturating_add)
}

/// Format a duration in seconds as zero-padded `HH:MM:SS`
///
/// Hours grow without bound; there is no day rollover.
pub fn format_hms(seconds: u64) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes_seconds() {
        assert_eq!(parse_duration(Some("04:30")), 270);
        assert_eq!(parse_duration(Some("00:59")), 59);
        assert_eq!(parse_duration(Some("10:00")), 600);
    }

    #[test]
    fn test_parse_hours_minutes_seconds() {
        assert_eq!(parse_duration(Some("1:05:30")), 3930);
        assert_eq!(parse_duration(Some("02:00:00")), 7200);
    }

    #[test]
    fn test_parse_bare_seconds() {
        assert_eq!(parse_duration(Some("42")), 42);
        assert_eq!(parse_duration(Some("0")), 0);
    }

    #[test]
    fn test_parse_missing_or_empty() {
        assert_eq!(parse_duration(None), 0);
        assert_eq!(parse_duration(Some("")), 0);
        assert_eq!(parse_duration(Some("   ")), 0);
    }

    #[test]
    fn test_parse_malformed_segments_degrade_to_zero() {
        // A bad segment contributes 0, the rest still counts
        assert_eq!(parse_duration(Some("ab:30")), 30);
        assert_eq!(parse_duration(Some("5:xx")), 300);
        assert_eq!(parse_duration(Some("::")), 0);
        assert_eq!(parse_duration(Some("-1:30")), 30);
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        assert_eq!(parse_duration(Some(" 04:30 ")), 270);
        assert_eq!(parse_duration(Some("1 : 02 : 03")), 3723);
    }

    #[test]
    fn test_parse_never_overflows() {
        // Absurd input saturates instead of panicking
        let label = format!("{}:{}:{}", u64::MAX, u64::MAX, u64::MAX);
        assert_eq!(parse_duration(Some(&label)), u64::MAX);
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(59), "00:00:59");
        assert_eq!(format_hms(3930), "01:05:30");
        assert_eq!(format_hms(7200), "02:00:00");
    }

    #[test]
    fn test_format_hms_hours_unbounded() {
        // 30 hours stays 30, no modulo at 24
        assert_eq!(format_hms(30 * 3600 + 15), "30:00:15");
        assert_eq!(format_hms(100 * 3600), "100:00:00");
    }

    #[test]
    fn test_format_round_trips_components() {
        for (h, m, s) in [(0u64, 0u64, 1u64), (0, 59, 59), (1, 5, 30), (12, 0, 0)] {
            let formatted = format_hms(h * 3600 + m * 60 + s);
            assert_eq!(formatted, format!("{:02}:{:02}:{:02}", h, m, s));
            assert_eq!(parse_duration(Some(&formatted)), h * 3600 + m * 60 + s);
        }
    }
}
