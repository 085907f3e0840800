use crate::modules::calendar::adapters::outbound::in_memory_calendar_repository::{
    CalendarStore, InMemoryCalendarRepository,
};
use crate::modules::calendar::use_cases::calendar_use_case::CalendarUseCase;
use crate::tests::fixtures::logger::RecordingLogger;
use std::sync::Arc;

pub type TestCalendar = CalendarUseCase<InMemoryCalendarRepository, RecordingLogger>;

/// Store, recording logger and a use case wired over them.
pub fn make_calendar_use_case() -> (Arc<CalendarStore>, Arc<RecordingLogger>, TestCalendar) {
    let store = Arc::new(CalendarStore::new());
    let logger = Arc::new(RecordingLogger::new());
    let repository = Arc::new(InMemoryCalendarRepository::new(store.clone()));
    let use_case = CalendarUseCase::new(repository, logger.clone());
    (store, logger, use_case)
}

pub fn make_offline_calendar_use_case() -> (Arc<RecordingLogger>, TestCalendar) {
    let store = Arc::new(CalendarStore::new());
    let logger = Arc::new(RecordingLogger::new());
    let mut repository = InMemoryCalendarRepository::new(store);
    repository.toggle_offline();
    let use_case = CalendarUseCase::new(Arc::new(repository), logger.clone());
    (logger, use_case)
}
