use crate::modules::calendar::core::errors::CalendarError;
use chrono::{DateTime, Datelike, Duration, Months, Utc};

pub fn day_end(start: DateTime<Utc>) -> Result<DateTime<Utc>, CalendarError> {
    start
        .checked_add_signed(Duration::hours(24))
        .ok_or(CalendarError::DateOutOfRange)
}

/// Fixed 168 hour span.
pub fn week_end(start: DateTime<Utc>) -> Result<DateTime<Utc>, CalendarError> {
    start
        .checked_add_signed(Duration::days(7))
        .ok_or(CalendarError::DateOutOfRange)
}

/// Same day of the next month. A day the next month lacks rolls over into the
/// month after (Jan 31 -> Mar 2 in 2024, Mar 31 -> May 1).
pub fn month_end(start: DateTime<Utc>) -> Result<DateTime<Utc>, CalendarError> {
    let overflow = Duration::days(i64::from(start.day0()));
    start
        .checked_sub_signed(overflow)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.checked_add_signed(overflow))
        .ok_or(CalendarError::DateOutOfRange)
}
