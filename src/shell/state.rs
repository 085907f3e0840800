use crate::modules::calendar::adapters::outbound::in_memory_calendar_repository::{
    CalendarStore, InMemoryCalendarRepository,
};
use crate::modules::calendar::use_cases::calendar_use_case::CalendarUseCase;
use crate::shared::core::cancellation::Cancellation;
use crate::shared::infrastructure::logging::TracingLogger;
use std::sync::Arc;

pub type CalendarService = CalendarUseCase<InMemoryCalendarRepository, TracingLogger>;

#[derive(Clone)]
pub struct AppState {
    pub calendar: Arc<CalendarService>,
    /// Fired on shutdown; threaded into every range query.
    pub cancellation: Cancellation,
}

impl AppState {
    pub fn new(calendar: Arc<CalendarService>, cancellation: Cancellation) -> Self {
        Self {
            calendar,
            cancellation,
        }
    }

    /// Store -> repository -> use case, all in memory.
    pub fn in_memory(store: Arc<CalendarStore>, cancellation: Cancellation) -> Self {
        let repository = Arc::new(InMemoryCalendarRepository::new(store));
        let calendar = Arc::new(CalendarUseCase::new(repository, Arc::new(TracingLogger)));
        Self::new(calendar, cancellation)
    }
}
