// Response envelopes and status mapping shared by the calendar HTTP handlers.
//
// Success bodies are `{"result": ...}`, failures are `{"error": "<message>"}`.

use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

use crate::modules::calendar::adapters::inbound::dates::InvalidDate;
use crate::modules::calendar::core::errors::CalendarError;
use crate::modules::calendar::core::event::CalendarEvent;
use crate::modules::calendar::use_cases::errors::ApplicationError;

#[derive(Debug, Serialize)]
pub struct ResultResponse<T> {
    pub result: T,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type EventsResponse = ResultResponse<Vec<CalendarEvent>>;

pub fn ok<T: Serialize>(result: T) -> Response {
    (StatusCode::OK, Json(ResultResponse { result })).into_response()
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn status_for(error: &CalendarError) -> StatusCode {
    match error {
        CalendarError::Validation { .. }
        | CalendarError::NoEventsFound
        | CalendarError::DateOutOfRange => StatusCode::BAD_REQUEST,
        CalendarError::EventDoesNotExist => StatusCode::NOT_FOUND,
        CalendarError::Storage(_) | CalendarError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let error = self.into_kind();
        error_response(status_for(&error), error.to_string())
    }
}

impl IntoResponse for InvalidDate {
    fn into_response(self) -> Response {
        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
