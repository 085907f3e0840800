use crate::modules::calendar::core::event::CalendarEvent;
use crate::modules::calendar::core::ports::{CalendarEventRepository, Logger};
use crate::modules::calendar::use_cases::calendar_use_case::CalendarUseCase;
use crate::modules::calendar::use_cases::errors::ApplicationError;
use crate::modules::calendar::use_cases::update_event::command::UpdateEvent;

const OP: &str = "calendar.update_event";

impl<TRepository, TLogger> CalendarUseCase<TRepository, TLogger>
where
    TRepository: CalendarEventRepository + 'static,
    TLogger: Logger + 'static,
{
    /// Replaces an existing event. Both timestamps are restamped with the current time.
    pub async fn update_event(&self, command: UpdateEvent) -> Result<(), ApplicationError> {
        let fields = [
            ("op", OP.to_string()),
            ("user_id", command.user_id.clone()),
            ("event_id", command.id.clone()),
        ];
        self.logger.info("Attempting to update calendar event", &fields);

        let event_id = self.parse_event_id(OP, &command.id)?;
        let user_id = self.parse_user_id(OP, &command.user_id)?;
        let replacement = CalendarEvent::new(event_id, user_id, command.event, command.date);

        self.repository
            .update(replacement)
            .await
            .map_err(|error| self.failure(OP, "Failed to update calendar event", &fields, error))?;

        self.logger
            .info("Successfully updated calendar event", &fields);
        Ok(())
    }
}
