//! Date helper functions

use chrono::{DateTime, TimeZone};

/// Short display format used in listings (like "Jan 15, 2024")
pub fn short_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%b %d, %Y").to_string()
}

/// Full display format used on the post page (like "January 15, 2024")
pub fn full_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%B %d, %Y").to_string()
}

/// ISO-8601 format for meta tags and `<time datetime>` attributes
pub fn iso_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_display_formats() {
        let date = Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(short_date(&date), "Jan 15, 2024");
        assert_eq!(full_date(&date), "January 15, 2024");
    }

    #[test]
    fn test_iso_date_roundtrips() {
        let date = Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let iso = iso_date(&date);
        assert!(iso.starts_with("2024-01-15T10:30:00"));
        assert!(DateTime::parse_from_rfc3339(&iso).is_ok());
    }
}
