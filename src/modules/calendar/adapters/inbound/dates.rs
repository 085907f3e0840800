// Wire date formats accepted by the inbound adapters. Everything is interpreted as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

pub const COMMAND_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid date format")]
pub struct InvalidDate;

/// `YYYY-MM-DD HH:MM:SS` or RFC 3339.
pub fn parse_command_date(raw: &str) -> Result<DateTime<Utc>, InvalidDate> {
    let raw = raw.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, COMMAND_DATE_FORMAT) {
        return Ok(naive.and_utc());
    }
    parse_rfc3339(raw)
}

/// `YYYY-MM-DD` (midnight) or RFC 3339.
pub fn parse_query_date(raw: &str) -> Result<DateTime<Utc>, InvalidDate> {
    let raw = raw.trim();
    if let Ok(day) = NaiveDate::parse_from_str(raw, QUERY_DATE_FORMAT) {
        return day
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc())
            .ok_or(InvalidDate);
    }
    parse_rfc3339(raw)
}

fn parse_rfc3339(raw: &str) -> Result<DateTime<Utc>, InvalidDate> {
    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| InvalidDate)
}
