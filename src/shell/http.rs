use axum::{
    Extension, Json, Router,
    extract::Request,
    http::{HeaderValue, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::time::{Duration, Instant};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::modules::calendar::use_cases::create_event::inbound::http as create_http;
use crate::modules::calendar::use_cases::delete_event::inbound::http as delete_http;
use crate::modules::calendar::use_cases::get_events::inbound::http as get_events_http;
use crate::modules::calendar::use_cases::update_event::inbound::http as update_http;
use crate::shell::config::AppConfig;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

/// Calendar routes, mounted under `/calendar`.
pub fn calendar_router(state: AppState) -> Router {
    Router::new()
        .route("/create-event", post(create_http::handle))
        .route("/update-event", post(update_http::handle))
        .route("/delete-event", post(delete_http::handle))
        .route("/events-for-day", get(get_events_http::handle_day))
        .route("/events-for-week", get(get_events_http::handle_week))
        .route("/events-for-month", get(get_events_http::handle_month))
        .with_state(state)
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/get-personal-id", get(personal_id))
        .nest("/calendar", calendar_router(state))
}

/// Full application: REST under `/api`, GraphQL at `/gql`, plus the configured layers.
pub fn router(state: AppState, config: &AppConfig) -> Router {
    let schema = build_schema(state.clone());

    let mut app = Router::new()
        .nest("/api", api_router(state))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(timeout_layer(config.timeout));

    if config.cors {
        app = app.layer(cors_layer(&config.allowed_origins));
    }

    if config.task_logger {
        app.layer(middleware::from_fn(log_requests))
    } else {
        app.layer(TraceLayer::new_for_http())
    }
}

/// Requests running past `timeout` are answered with 408.
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

async fn health() -> Json<Value> {
    Json(json!({ "message": "OK" }))
}

async fn personal_id() -> Json<Value> {
    Json(json!({ "id": Uuid::now_v7().to_string() }))
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request finished"
    );
    response
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(%origin, %error, "ignoring unusable CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
