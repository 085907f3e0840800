use crate::modules::calendar::core::errors::CalendarError;
use thiserror::Error;

/// A failed use case call: the operation that failed plus the unmodified domain error.
#[derive(Debug, Error)]
#[error("{op}: {source}")]
pub struct ApplicationError {
    pub op: &'static str,
    #[source]
    pub source: CalendarError,
}

impl ApplicationError {
    pub fn new(op: &'static str, source: CalendarError) -> Self {
        Self { op, source }
    }

    pub fn kind(&self) -> &CalendarError {
        &self.source
    }

    pub fn into_kind(self) -> CalendarError {
        self.source
    }
}
