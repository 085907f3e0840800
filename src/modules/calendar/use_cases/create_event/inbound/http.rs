use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::calendar::adapters::inbound::dates::parse_command_date;
use crate::modules::calendar::adapters::inbound::http::ok;
use crate::modules::calendar::use_cases::create_event::command::CreateEvent;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateEventBody {
    pub user_id: String,
    pub event: String,
    pub date: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let date = match parse_command_date(&body.date) {
        Ok(date) => date,
        Err(error) => return error.into_response(),
    };

    let command = CreateEvent {
        user_id: body.user_id,
        event: body.event,
        date,
    };

    match state.calendar.create_event(command).await {
        Ok(id) => ok(format!("Event created with ID: {id}")),
        Err(error) => error.into_response(),
    }
}
