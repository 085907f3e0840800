// Calendar use case service: the only entry point inbound adapters talk to.
//
// Responsibilities
// - Parse identifiers, build records, and delegate persistence to the repository port.
// - Log the attempt and the outcome of every operation with op/user/event context.
// - Wrap every failure with the operation name without changing its kind.
//
// The operations themselves live next to their commands and queries, one `impl`
// block per use case folder.

use crate::modules::calendar::core::errors::CalendarError;
use crate::modules::calendar::core::ports::{CalendarEventRepository, LogFields, Logger};
use crate::modules::calendar::use_cases::errors::ApplicationError;
use std::sync::Arc;
use uuid::Uuid;

pub struct CalendarUseCase<TRepository, TLogger>
where
    TRepository: CalendarEventRepository + 'static,
    TLogger: Logger + 'static,
{
    pub(crate) repository: Arc<TRepository>,
    pub(crate) logger: Arc<TLogger>,
}

impl<TRepository, TLogger> CalendarUseCase<TRepository, TLogger>
where
    TRepository: CalendarEventRepository + 'static,
    TLogger: Logger + 'static,
{
    pub fn new(repository: Arc<TRepository>, logger: Arc<TLogger>) -> Self {
        Self { repository, logger }
    }

    pub(crate) fn parse_user_id(&self, op: &'static str, raw: &str) -> Result<Uuid, ApplicationError> {
        self.parse_id(op, "user_id", "Failed to parse user ID", raw)
    }

    pub(crate) fn parse_event_id(&self, op: &'static str, raw: &str) -> Result<Uuid, ApplicationError> {
        self.parse_id(op, "event_id", "Failed to parse event ID", raw)
    }

    fn parse_id(
        &self,
        op: &'static str,
        field: &'static str,
        message: &str,
        raw: &str,
    ) -> Result<Uuid, ApplicationError> {
        Uuid::parse_str(raw).map_err(|source| {
            self.logger.error(
                message,
                &[
                    ("op", op.to_string()),
                    (field, raw.to_string()),
                    ("error", source.to_string()),
                ],
            );
            ApplicationError::new(
                op,
                CalendarError::Validation {
                    field,
                    value: raw.to_string(),
                    source,
                },
            )
        })
    }

    /// Logs `message` at error level with the failure appended, then wraps it.
    pub(crate) fn failure(
        &self,
        op: &'static str,
        message: &str,
        fields: &LogFields,
        error: CalendarError,
    ) -> ApplicationError {
        self.logger
            .error(message, &with_field(fields, "error", error.to_string()));
        ApplicationError::new(op, error)
    }
}

pub(crate) fn with_field(
    fields: &LogFields,
    key: &'static str,
    value: String,
) -> Vec<(&'static str, String)> {
    let mut extended = fields.to_vec();
    extended.push((key, value));
    extended
}
