//! Invocation Gateway
//!
//! HTTP adapter around the benchmark harness: decodes the body, runs one
//! invocation, and maps the outcome onto `200 {latency, data}` or a JSON
//! error.

pub mod error;
pub mod handlers;
pub mod openapi;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// Build the gateway router
pub fn router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        // Function invocation
        .route("/", post(handlers::invoke))
        .route("/function/crypto", post(handlers::invoke))
        // Health check
        .route("/api/v1/health", get(handlers::health_check))
        .with_state(state)
        // OpenAPI / Swagger UI (stateless, added after with_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start HTTP Gateway server
pub async fn run_server(host: &str, port: u16, state: AppState) -> anyhow::Result<()> {
    let app = router(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        anyhow::anyhow!(
            "Failed to bind to {}: {} (port {} may already be in use)",
            addr,
            e,
            port
        )
    })?;

    tracing::info!("[GATEWAY] listening on http://{}", addr);
    tracing::info!("[GATEWAY] API docs: http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("[GATEWAY] shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("[GATEWAY] failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
}
