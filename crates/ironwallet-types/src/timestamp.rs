//! Lenient timestamp decoding
//!
//! The backend sends RFC 3339 timestamps, but naive values such as
//! `2024-06-01T12:00:00.123456` also occur. Naive values are taken as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Parse a backend timestamp.
pub fn parse(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {s}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_rfc3339_and_offsets() {
        let expected = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(parse("2024-06-01T12:00:00Z"), Some(expected));
        assert_eq!(parse("2024-06-01T14:00:00+02:00"), Some(expected));
    }

    #[test]
    fn test_naive_taken_as_utc() {
        let parsed = parse("2024-06-01T12:00:00.123456").unwrap();
        assert_eq!(parsed.timestamp(), Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap().timestamp());
        assert_eq!(parsed.timestamp_subsec_micros(), 123_456);

        assert!(parse("2024-06-01 12:00:00").is_some());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(parse("yesterday").is_none());
        assert!(parse("").is_none());
    }
}
