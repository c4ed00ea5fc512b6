//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// Parse an authored date, keeping only the calendar day
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // RFC 3339 / ISO 8601 with offset
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

/// Format a date in W3C datetime format, as used by sitemaps
pub fn date_xml<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 7);
        assert_eq!(parse_date("2024-01-07"), expected);
        assert_eq!(parse_date(" 2024/01/07 "), expected);
        assert_eq!(parse_date("2024-01-07 18:30:00"), expected);
        assert_eq!(parse_date("2024-01-07T18:30:00+02:00"), expected);
        assert_eq!(parse_date("January 07, 2024"), expected);
        assert_eq!(parse_date("next week"), None);
    }

    #[test]
    fn test_date_xml() {
        let dt = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 15, 10, 30, 0)
            .unwrap();
        assert_eq!(date_xml(&dt), "2024-01-15T10:30:00.000+00:00");

        let utc = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(date_xml(&utc), "2024-01-15T10:30:00.000+00:00");
    }
}
