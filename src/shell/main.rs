use std::sync::Arc;

use calendar::modules::calendar::adapters::outbound::in_memory_calendar_repository::CalendarStore;
use calendar::shared::core::cancellation::Cancellation;
use calendar::shared::infrastructure::logging::init_tracing;
use calendar::shell::config::AppConfig;
use calendar::shell::http::router;
use calendar::shell::shutdown::cancel_on;
use calendar::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    // In-memory deps for now
    let store = Arc::new(CalendarStore::new());
    let (shutdown, cancellation) = Cancellation::new();
    let state = AppState::in_memory(store, cancellation);

    let app = router(state, &config);

    let addr = config.socket_addr();
    tracing::info!("REST endpoint: http://{}/api", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(cancel_on(tokio::signal::ctrl_c(), shutdown))
        .await?;

    tracing::info!("server stopped");
    Ok(())
}
