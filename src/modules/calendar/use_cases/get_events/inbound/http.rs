use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::calendar::adapters::inbound::dates::parse_query_date;
use crate::modules::calendar::adapters::inbound::http::EventsResponse;
use crate::modules::calendar::core::event::CalendarEvent;
use crate::modules::calendar::use_cases::errors::ApplicationError;
use crate::modules::calendar::use_cases::get_events::queries::{
    GetEventsForDay, GetEventsForMonth, GetEventsForWeek,
};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DayParams {
    pub user_id: String,
    pub date: String,
}

#[derive(Deserialize)]
pub struct RangeParams {
    pub user_id: String,
    pub date_start: String,
}

fn respond(result: Result<Vec<CalendarEvent>, ApplicationError>) -> Response {
    match result {
        Ok(events) => Json(EventsResponse { result: events }).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn handle_day(
    State(state): State<AppState>,
    Query(params): Query<DayParams>,
) -> impl IntoResponse {
    let date = match parse_query_date(&params.date) {
        Ok(date) => date,
        Err(error) => return error.into_response(),
    };
    let query = GetEventsForDay {
        user_id: params.user_id,
        date,
    };
    respond(state.calendar.get_events_for_day(query, &state.cancellation).await)
}

pub async fn handle_week(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> impl IntoResponse {
    let date_start = match parse_query_date(&params.date_start) {
        Ok(date) => date,
        Err(error) => return error.into_response(),
    };
    let query = GetEventsForWeek {
        user_id: params.user_id,
        date_start,
    };
    respond(state.calendar.get_events_for_week(query, &state.cancellation).await)
}

pub async fn handle_month(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> impl IntoResponse {
    let date_start = match parse_query_date(&params.date_start) {
        Ok(date) => date,
        Err(error) => return error.into_response(),
    };
    let query = GetEventsForMonth {
        user_id: params.user_id,
        date_start,
    };
    respond(state.calendar.get_events_for_month(query, &state.cancellation).await)
}
