// Range queries over one user's calendar.
//
// Every window is half-open. An empty window returns `NoEventsFound`, distinct from
// `EventDoesNotExist`, so callers can tell "nothing scheduled" from "unknown id".

use crate::modules::calendar::core::errors::CalendarError;
use crate::modules::calendar::core::event::CalendarEvent;
use crate::modules::calendar::core::ports::{CalendarEventRepository, LogFields, Logger};
use crate::modules::calendar::core::windows::{month_end, week_end};
use crate::modules::calendar::use_cases::calendar_use_case::{CalendarUseCase, with_field};
use crate::modules::calendar::use_cases::errors::ApplicationError;
use crate::modules::calendar::use_cases::get_events::queries::{
    GetEventsForDay, GetEventsForMonth, GetEventsForWeek,
};
use crate::shared::core::cancellation::Cancellation;
use chrono::{DateTime, Utc};

const OP_DAY: &str = "calendar.get_events_for_day";
const OP_WEEK: &str = "calendar.get_events_for_week";
const OP_MONTH: &str = "calendar.get_events_for_month";

fn range_fields(
    op: &'static str,
    user_id: &str,
    key: &'static str,
    date: DateTime<Utc>,
) -> [(&'static str, String); 3] {
    [
        ("op", op.to_string()),
        ("user_id", user_id.to_string()),
        (key, date.to_rfc3339()),
    ]
}

impl<TRepository, TLogger> CalendarUseCase<TRepository, TLogger>
where
    TRepository: CalendarEventRepository + 'static,
    TLogger: Logger + 'static,
{
    pub async fn get_events_for_day(
        &self,
        query: GetEventsForDay,
        cancellation: &Cancellation,
    ) -> Result<Vec<CalendarEvent>, ApplicationError> {
        let fields = range_fields(OP_DAY, &query.user_id, "date", query.date);
        self.logger.info("Attempting to get events for day", &fields);

        let user_id = self.parse_user_id(OP_DAY, &query.user_id)?;
        let result = self
            .repository
            .read_by_date(user_id, query.date, cancellation)
            .await;

        self.finish_range(OP_DAY, "day", &fields, result)
    }

    pub async fn get_events_for_week(
        &self,
        query: GetEventsForWeek,
        cancellation: &Cancellation,
    ) -> Result<Vec<CalendarEvent>, ApplicationError> {
        let fields = range_fields(OP_WEEK, &query.user_id, "date_start", query.date_start);
        self.logger.info("Attempting to get events for week", &fields);

        let user_id = self.parse_user_id(OP_WEEK, &query.user_id)?;
        let end = match week_end(query.date_start) {
            Ok(end) => end,
            Err(error) => {
                return Err(self.failure(
                    OP_WEEK,
                    "Failed to get events for week",
                    &fields,
                    error,
                ));
            }
        };
        let result = self
            .repository
            .read_between_dates(user_id, query.date_start, end, cancellation)
            .await;

        self.finish_range(OP_WEEK, "week", &fields, result)
    }

    pub async fn get_events_for_month(
        &self,
        query: GetEventsForMonth,
        cancellation: &Cancellation,
    ) -> Result<Vec<CalendarEvent>, ApplicationError> {
        let fields = range_fields(OP_MONTH, &query.user_id, "date_start", query.date_start);
        self.logger.info("Attempting to get events for month", &fields);

        let user_id = self.parse_user_id(OP_MONTH, &query.user_id)?;
        let end = match month_end(query.date_start) {
            Ok(end) => end,
            Err(error) => {
                return Err(self.failure(
                    OP_MONTH,
                    "Failed to get events for month",
                    &fields,
                    error,
                ));
            }
        };
        let result = self
            .repository
            .read_between_dates(user_id, query.date_start, end, cancellation)
            .await;

        self.finish_range(OP_MONTH, "month", &fields, result)
    }

    fn finish_range(
        &self,
        op: &'static str,
        period: &str,
        fields: &LogFields,
        result: Result<Vec<CalendarEvent>, CalendarError>,
    ) -> Result<Vec<CalendarEvent>, ApplicationError> {
        let events = result.map_err(|error| {
            self.failure(op, &format!("Failed to get events for {period}"), fields, error)
        })?;

        if events.is_empty() {
            self.logger.info(&format!("No events found for {period}"), fields);
            return Err(ApplicationError::new(op, CalendarError::NoEventsFound));
        }

        self.logger.info(
            &format!("Successfully retrieved events for {period}"),
            &with_field(fields, "count", events.len().to_string()),
        );
        Ok(events)
    }
}
