use crate::modules::calendar::core::ports::{CalendarEventRepository, Logger};
use crate::modules::calendar::use_cases::calendar_use_case::CalendarUseCase;
use crate::modules::calendar::use_cases::delete_event::command::DeleteEvent;
use crate::modules::calendar::use_cases::errors::ApplicationError;

const OP: &str = "calendar.delete_event";

impl<TRepository, TLogger> CalendarUseCase<TRepository, TLogger>
where
    TRepository: CalendarEventRepository + 'static,
    TLogger: Logger + 'static,
{
    pub async fn delete_event(&self, command: DeleteEvent) -> Result<(), ApplicationError> {
        let fields = [
            ("op", OP.to_string()),
            ("user_id", command.user_id.clone()),
            ("event_id", command.id.clone()),
        ];
        self.logger.info("Attempting to delete calendar event", &fields);

        let event_id = self.parse_event_id(OP, &command.id)?;
        let user_id = self.parse_user_id(OP, &command.user_id)?;

        self.repository
            .delete(user_id, event_id)
            .await
            .map_err(|error| self.failure(OP, "Failed to delete calendar event", &fields, error))?;

        self.logger
            .info("Successfully deleted calendar event", &fields);
        Ok(())
    }
}
