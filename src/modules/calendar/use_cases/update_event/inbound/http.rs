use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::calendar::adapters::inbound::dates::parse_command_date;
use crate::modules::calendar::adapters::inbound::http::ok;
use crate::modules::calendar::use_cases::update_event::command::UpdateEvent;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateEventBody {
    pub id: String,
    pub user_id: String,
    pub event: String,
    pub date: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<UpdateEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let date = match parse_command_date(&body.date) {
        Ok(date) => date,
        Err(error) => return error.into_response(),
    };

    let id = body.id.clone();
    let command = UpdateEvent {
        id: body.id,
        user_id: body.user_id,
        event: body.event,
        date,
    };

    match state.calendar.update_event(command).await {
        Ok(()) => ok(format!("Event {id} updated successfully")),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod update_event_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use chrono::{TimeZone, Utc};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::modules::calendar::adapters::outbound::in_memory_calendar_repository::CalendarStore;
    use crate::modules::calendar::core::event::CalendarEvent;
    use crate::shared::core::cancellation::Cancellation;
    use crate::shell::state::AppState;

    use super::handle;

    fn app(store: Arc<CalendarStore>) -> Router {
        Router::new()
            .route("/update-event", post(handle))
            .with_state(AppState::in_memory(store, Cancellation::never()))
    }

    fn request(body: String) -> Request<Body> {
        Request::post("/update-event")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_200_and_replace_the_event() {
        let store = Arc::new(CalendarStore::new());
        let user_id = Uuid::now_v7();
        let existing = CalendarEvent::new(
            Uuid::now_v7(),
            user_id,
            "Team sync",
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
        );
        store
            .set(&user_id.to_string(), &existing.id.to_string(), existing.clone())
            .await;
        let body = format!(
            r#"{{"id":"{}","user_id":"{user_id}","event":"Moved","date":"2024-01-16 09:00:00"}}"#,
            existing.id
        );

        let response = app(store.clone()).oneshot(request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json["result"],
            format!("Event {} updated successfully", existing.id)
        );
        let stored = store
            .get(&user_id.to_string(), &existing.id.to_string())
            .await
            .unwrap();
        assert_eq!(stored.event, "Moved");
        assert_eq!(stored.date, Utc.with_ymd_and_hms(2024, 1, 16, 9, 0, 0).unwrap());
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_event() {
        let body = format!(
            r#"{{"id":"{}","user_id":"{}","event":"Moved","date":"2024-01-16 09:00:00"}}"#,
            Uuid::now_v7(),
            Uuid::now_v7()
        );

        let response = app(Arc::new(CalendarStore::new()))
            .oneshot(request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "event does not exist");
    }

    #[tokio::test]
    async fn it_should_return_422_when_fields_are_missing() {
        let response = app(Arc::new(CalendarStore::new()))
            .oneshot(request(r#"{"event":"Moved"}"#.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
