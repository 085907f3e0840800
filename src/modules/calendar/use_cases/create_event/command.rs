use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEvent {
    pub user_id: String,
    pub event: String,
    pub date: DateTime<Utc>,
}
