use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("invalid {field} `{value}`: {source}")]
    Validation {
        field: &'static str,
        value: String,
        #[source]
        source: uuid::Error,
    },

    #[error("event does not exist")]
    EventDoesNotExist,

    #[error("no calendar events found")]
    NoEventsFound,

    #[error("date window out of range")]
    DateOutOfRange,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("operation cancelled")]
    Cancelled,
}

impl CalendarError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
