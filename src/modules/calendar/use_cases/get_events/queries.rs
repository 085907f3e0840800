use chrono::{DateTime, Utc};

/// Events in `[date, date + 24h)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetEventsForDay {
    pub user_id: String,
    pub date: DateTime<Utc>,
}

/// Events in `[date_start, date_start + 7 days)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetEventsForWeek {
    pub user_id: String,
    pub date_start: DateTime<Utc>,
}

/// Events in `[date_start, date_start + 1 month)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetEventsForMonth {
    pub user_id: String,
    pub date_start: DateTime<Utc>,
}
