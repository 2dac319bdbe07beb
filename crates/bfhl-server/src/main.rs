//! Binary entrypoint for the bfhl HTTP server.
//!
//! Configuration comes from environment variables, see
//! [`bfhl_server::config`].

use bfhl_server::config::ServiceConfig;
use bfhl_server::router::build_router;
use bfhl_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = ServiceConfig::from_env();
    let port = config.port;

    let state = AppState::new(config).expect("Failed to initialize application state");
    if state.service.is_live() {
        tracing::info!("AI resolver live");
    } else {
        tracing::info!("AI resolver degraded: GEMINI_API_KEY not set");
    }
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("bfhl server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
