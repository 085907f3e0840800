// Shared test fixture for the CreateEvent command.

use crate::modules::calendar::use_cases::create_event::command::CreateEvent;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventDto {
    pub user_id: String,
    pub event: String,
    pub date: DateTime<Utc>,
}

pub struct CreateEventBuilder {
    inner: CreateEvent,
}

impl Default for CreateEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateEventBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/create_event.json").unwrap();
        let dto: CreateEventDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: CreateEvent {
                user_id: dto.user_id,
                event: dto.event,
                date: dto.date,
            },
        }
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn event(mut self, v: impl Into<String>) -> Self {
        self.inner.event = v.into();
        self
    }

    pub fn date(mut self, v: DateTime<Utc>) -> Self {
        self.inner.date = v;
        self
    }

    pub fn build(self) -> CreateEvent {
        self.inner
    }
}

#[cfg(test)]
mod create_event_builder_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = CreateEventBuilder::default().build();
        assert_eq!(built.user_id, "0190f5a2-7c4e-7b1a-9d3f-2a6b8c4e1f00");
        assert_eq!(built.event, "Team sync");
        assert_eq!(built.date, Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap());
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let date = Utc.with_ymd_and_hms(2030, 6, 1, 8, 30, 0).unwrap();
        let custom = CreateEventBuilder::new()
            .user_id("uid-456")
            .event("Dentist")
            .date(date)
            .build();

        assert_eq!(custom.user_id, "uid-456");
        assert_eq!(custom.event, "Dentist");
        assert_eq!(custom.date, date);
    }
}
