//! Display helpers for rendering posts and comments.

use chrono::{DateTime, Datelike, TimeZone};

/// `M/D/YYYY`, without zero padding.
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Append an `s` unless the amount is exactly one.
pub fn format_plural(word: &str, amount: i64) -> String {
    if amount == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Reduce a URL to its bare host: no scheme, no `www.`, no path or query.
pub fn format_url(url: &str) -> &str {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .unwrap_or(url);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);

    let end = rest.find(['/', '?']).unwrap_or(rest.len());
    &rest[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2020, 3, 20)
            .unwrap()
            .and_hms_opt(16, 12, 3)
            .unwrap()
            .and_utc();

        assert_eq!(format_date(&date), "3/20/2020");
        assert_eq!(format_date(&date.with_timezone(&Utc)), "3/20/2020");
    }

    #[test]
    fn test_format_plural() {
        assert_eq!(format_plural("Tiger", 2), "Tigers");
        assert_eq!(format_plural("lion", 1), "lion");
        assert_eq!(format_plural("point", 0), "points");
    }

    #[test]
    fn test_format_url() {
        assert_eq!(format_url("http://test.com/page/1"), "test.com");
        assert_eq!(format_url("http://www.coolstuff.com/abcdefg/"), "coolstuff.com");
        assert_eq!(format_url("https://www.google.com?q=hello"), "google.com");
        assert_eq!(format_url("example.org"), "example.org");
    }
}
