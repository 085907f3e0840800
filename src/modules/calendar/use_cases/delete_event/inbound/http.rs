use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::calendar::adapters::inbound::http::ok;
use crate::modules::calendar::use_cases::delete_event::command::DeleteEvent;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeleteEventBody {
    pub id: String,
    pub user_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<DeleteEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let id = body.id.clone();
    let command = DeleteEvent {
        id: body.id,
        user_id: body.user_id,
    };

    match state.calendar.delete_event(command).await {
        Ok(()) => ok(format!("Event {id} deleted successfully")),
        Err(error) => error.into_response(),
    }
}
