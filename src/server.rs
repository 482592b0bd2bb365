//! Router assembly and the server loop.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::Request,
    http::{StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    config::Config,
    error::{Error, Result},
    handlers::{entity_routes, health_check, patchable_entity_routes},
    models::{
        ApiResponse,
        authors::Author, books::Book, categories::Category, couriers::Courier,
        customers::Customer, orders::Order, products::Product, users::User,
    },
    queries::store::{Storage, Store},
    state::AppState,
};

/// Every route, without middleware.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .merge(entity_routes::<Book>("book"))
        .merge(entity_routes::<User>("user"))
        .merge(entity_routes::<Author>("author"))
        .merge(entity_routes::<Customer>("customer"))
        .merge(entity_routes::<Courier>("courier"))
        .merge(entity_routes::<Product>("product"))
        .merge(entity_routes::<Category>("category"))
        .merge(patchable_entity_routes::<Order>("order"))
}

/// Puts bodiless 404/405/408 responses, which never reach a handler, into
/// the response envelope.
async fn envelope_bare_errors(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    if response.headers().contains_key(header::CONTENT_TYPE) {
        return response;
    }

    let status = response.status();
    let message = match status {
        StatusCode::NOT_FOUND => "Route not found",
        StatusCode::METHOD_NOT_ALLOWED => "Method not allowed",
        StatusCode::REQUEST_TIMEOUT => "Request timed out",
        _ => return response,
    };
    tracing::warn!(status = %status, "{}", message);

    let description = status.canonical_reason().unwrap_or("Error");
    ApiResponse::new(status, description, message).into_response()
}

/// The full application: routes, tracing, CORS and a per-request timeout.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(envelope_bare_errors))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    request_timeout,
                )),
        )
        .with_state(state)
}

/// Connects to PostgreSQL and serves until Ctrl+C or SIGTERM.
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(Store::connect(&config.database).await?);
    let state = AppState::new(store.clone(), config.pagination);
    let app = router(state, config.server.request_timeout());

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind {}: {}", address, e)))?;
    tracing::info!("Server listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::Internal(format!("Server error: {}", e)))?;

    store.close().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}
