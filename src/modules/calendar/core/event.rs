use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CalendarEvent {
    /// Builds a record stamped with the current time for both timestamps.
    pub fn new(id: Uuid, user_id: Uuid, event: impl Into<String>, date: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            event: event.into(),
            date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Half-open membership: `start` is inside, `end` is not.
    pub fn occurs_within(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start <= self.date && self.date < end
    }
}
