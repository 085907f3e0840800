// In memory implementation of the CalendarEventRepository port.
//
// Purpose
// - Translate typed calendar operations into owner/id string keys on the partitioned store.
//
// Responsibilities
// - Map store absence onto `EventDoesNotExist` and store cancellation onto `Cancelled`.
// - Use the store's atomic primitives for update and delete so no check-then-act window exists.

use crate::modules::calendar::core::errors::CalendarError;
use crate::modules::calendar::core::event::CalendarEvent;
use crate::modules::calendar::core::ports::CalendarEventRepository;
use crate::modules::calendar::core::windows::day_end;
use crate::shared::core::cancellation::Cancellation;
use crate::shared::infrastructure::partitioned_store::StoreError;
use crate::shared::infrastructure::partitioned_store::in_memory::InMemoryPartitionedStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

pub type CalendarStore = InMemoryPartitionedStore<CalendarEvent>;

pub struct InMemoryCalendarRepository {
    store: Arc<CalendarStore>,
    is_offline: bool,
}

impl InMemoryCalendarRepository {
    pub fn new(store: Arc<CalendarStore>) -> Self {
        Self {
            store,
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), CalendarError> {
        if self.is_offline {
            return Err(CalendarError::Storage("calendar repository offline".into()));
        }
        Ok(())
    }
}

impl From<StoreError> for CalendarError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => CalendarError::EventDoesNotExist,
            StoreError::Cancelled => CalendarError::Cancelled,
        }
    }
}

#[async_trait::async_trait]
impl CalendarEventRepository for InMemoryCalendarRepository {
    async fn save(&self, event: CalendarEvent) -> Result<(), CalendarError> {
        self.ensure_online()?;
        let (owner, id) = (event.user_id.to_string(), event.id.to_string());
        self.store.set(&owner, &id, event).await;
        Ok(())
    }

    async fn read(&self, user_id: Uuid, event_id: Uuid) -> Result<CalendarEvent, CalendarError> {
        self.ensure_online()?;
        Ok(self
            .store
            .get(&user_id.to_string(), &event_id.to_string())
            .await?)
    }

    async fn update(&self, event: CalendarEvent) -> Result<(), CalendarError> {
        self.ensure_online()?;
        let (owner, id) = (event.user_id.to_string(), event.id.to_string());
        Ok(self.store.update_if_present(&owner, &id, event).await?)
    }

    async fn delete(&self, user_id: Uuid, event_id: Uuid) -> Result<(), CalendarError> {
        self.ensure_online()?;
        self.store
            .remove(&user_id.to_string(), &event_id.to_string())
            .await?;
        Ok(())
    }

    async fn read_by_date(
        &self,
        user_id: Uuid,
        date: DateTime<Utc>,
        cancellation: &Cancellation,
    ) -> Result<Vec<CalendarEvent>, CalendarError> {
        let end = day_end(date)?;
        self.read_between_dates(user_id, date, end, cancellation).await
    }

    async fn read_between_dates(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        cancellation: &Cancellation,
    ) -> Result<Vec<CalendarEvent>, CalendarError> {
        self.ensure_online()?;
        let mut events = self
            .store
            .scan(&user_id.to_string(), cancellation, |event| {
                event.occurs_within(start, end)
            })
            .await?;
        // Partition iteration order is unspecified.
        events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        Ok(events)
    }
}
