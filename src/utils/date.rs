//! Date formatting for pages and feeds.
//!
//! Post dates are calendar dates without a time; feeds and sitemaps pin them
//! to midnight UTC.

use chrono::{Datelike, Local, NaiveDate, NaiveTime};

/// "January 15, 2025", as shown in a post header.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "Jan 15, 2025", as shown on cards.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// RFC 2822 timestamp at midnight UTC, for RSS `pubDate`.
pub fn rfc2822(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN).and_utc().to_rfc2822()
}

/// "2025-01-15", for sitemap `lastmod`.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Calendar year on the local clock, for the footer copyright line.
pub fn current_year() -> i32 {
    Local::now().year()
}
