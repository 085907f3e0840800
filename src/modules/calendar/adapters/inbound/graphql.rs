use crate::modules::calendar::adapters::inbound::dates::InvalidDate;
use crate::modules::calendar::core::event::CalendarEvent;
use crate::modules::calendar::use_cases::errors::ApplicationError;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlCalendarEvent {
    pub id: String,
    pub user_id: String,
    pub event: String,
    pub date: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CalendarEvent> for GqlCalendarEvent {
    fn from(v: CalendarEvent) -> Self {
        Self {
            id: v.id.to_string(),
            user_id: v.user_id.to_string(),
            event: v.event,
            date: v.date.to_rfc3339(),
            created_at: v.created_at.to_rfc3339(),
            updated_at: v.updated_at.to_rfc3339(),
        }
    }
}

/// Domain message as the GraphQL error message, without the operation prefix.
pub fn gql_error(error: ApplicationError) -> async_graphql::Error {
    async_graphql::Error::new(error.into_kind().to_string())
}

pub fn gql_date_error(error: InvalidDate) -> async_graphql::Error {
    async_graphql::Error::new(error.to_string())
}
