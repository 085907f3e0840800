use crate::modules::calendar::core::event::CalendarEvent;
use crate::modules::calendar::core::ports::{CalendarEventRepository, Logger};
use crate::modules::calendar::use_cases::calendar_use_case::CalendarUseCase;
use crate::modules::calendar::use_cases::create_event::command::CreateEvent;
use crate::modules::calendar::use_cases::errors::ApplicationError;
use uuid::Uuid;

const OP: &str = "calendar.create_event";

impl<TRepository, TLogger> CalendarUseCase<TRepository, TLogger>
where
    TRepository: CalendarEventRepository + 'static,
    TLogger: Logger + 'static,
{
    /// Stores a new event for the user and returns its generated id.
    pub async fn create_event(&self, command: CreateEvent) -> Result<String, ApplicationError> {
        let fields = [
            ("op", OP.to_string()),
            ("user_id", command.user_id.clone()),
        ];
        self.logger.info("Attempting to create calendar event", &fields);

        let user_id = self.parse_user_id(OP, &command.user_id)?;
        let event = CalendarEvent::new(Uuid::now_v7(), user_id, command.event, command.date);
        let event_id = event.id.to_string();

        self.repository
            .save(event)
            .await
            .map_err(|error| self.failure(OP, "Failed to save calendar event", &fields, error))?;

        self.logger.info(
            "Successfully created calendar event",
            &[
                ("op", OP.to_string()),
                ("user_id", command.user_id),
                ("event_id", event_id.clone()),
            ],
        );
        Ok(event_id)
    }
}
