use chrono::{DateTime, Utc};

/// Full replacement of an existing event's description and date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEvent {
    pub id: String,
    pub user_id: String,
    pub event: String,
    pub date: DateTime<Utc>,
}
