use chrono::{DateTime, FixedOffset};

/// RFC 1123 with a numeric zone, e.g. `Mon, 02 Jan 2006 15:04:05 -0700`.
pub const RFC1123Z: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Formats a timestamp in its own offset using [`RFC1123Z`].
pub fn format_rfc1123z(time: &DateTime<FixedOffset>) -> String {
    time.format(RFC1123Z).to_string()
}

/// Formats the first present timestamp, or returns an empty string.
///
/// Never substitutes the current time.
pub fn format_first(candidates: &[Option<&DateTime<FixedOffset>>]) -> String {
    candidates
        .iter()
        .flatten()
        .next()
        .map(|time| format_rfc1123z(time))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_format_keeps_offset() {
        let time = parse("2006-01-02T15:04:05-07:00");
        assert_eq!(format_rfc1123z(&time), "Mon, 02 Jan 2006 15:04:05 -0700");
    }

    #[test]
    fn test_format_utc_uses_numeric_zone() {
        let time = parse("2024-03-09T08:07:06Z");
        assert_eq!(format_rfc1123z(&time), "Sat, 09 Mar 2024 08:07:06 +0000");
    }

    #[test]
    fn test_format_first_skips_missing() {
        let updated = parse("2024-03-09T08:07:06Z");
        assert_eq!(
            format_first(&[None, Some(&updated)]),
            "Sat, 09 Mar 2024 08:07:06 +0000"
        );
    }

    #[test]
    fn test_format_first_prefers_earlier_candidate() {
        let created = parse("2024-01-01T00:00:00Z");
        let updated = parse("2024-03-09T08:07:06Z");
        assert_eq!(
            format_first(&[Some(&created), Some(&updated)]),
            "Mon, 01 Jan 2024 00:00:00 +0000"
        );
    }

    #[test]
    fn test_format_first_all_missing_is_empty() {
        assert_eq!(format_first(&[None, None]), "");
    }
}
