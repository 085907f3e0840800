// Ports define what the calendar core needs from the outside world, without implementing it.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits.
// - Single-key operations take no cancellation signal; range reads do.

use crate::modules::calendar::core::errors::CalendarError;
use crate::modules::calendar::core::event::CalendarEvent;
use crate::shared::core::cancellation::Cancellation;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[async_trait]
pub trait CalendarEventRepository: Send + Sync {
    async fn save(&self, event: CalendarEvent) -> Result<(), CalendarError>;

    async fn read(&self, user_id: Uuid, event_id: Uuid) -> Result<CalendarEvent, CalendarError>;

    /// Replaces an existing record; never creates one.
    async fn update(&self, event: CalendarEvent) -> Result<(), CalendarError>;

    async fn delete(&self, user_id: Uuid, event_id: Uuid) -> Result<(), CalendarError>;

    /// Events dated in `[date, date + 24h)`.
    async fn read_by_date(
        &self,
        user_id: Uuid,
        date: DateTime<Utc>,
        cancellation: &Cancellation,
    ) -> Result<Vec<CalendarEvent>, CalendarError>;

    /// Events dated in `[start, end)`.
    async fn read_between_dates(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        cancellation: &Cancellation,
    ) -> Result<Vec<CalendarEvent>, CalendarError>;
}

/// Ordered key/value context attached to a log line.
pub type LogFields = [(&'static str, String)];

/// Leveled structured logging. Implementations must not block or panic.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str, fields: &LogFields);
    fn error(&self, message: &str, fields: &LogFields);
}
