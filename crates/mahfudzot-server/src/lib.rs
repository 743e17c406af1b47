//! Mahfudzot Server
//!
//! HTTP service for a fixed collection of mahfudzot. Quotes live in
//! PostgreSQL when it is reachable; otherwise the server falls back to an
//! in-memory copy of the embedded seed catalog.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod services;
pub mod storage;

use axum::{error_handling::HandleErrorLayer, http::StatusCode, routing::get, BoxError, Router};
use std::sync::Arc;
use std::time::Duration;
use tower::timeout::{error::Elapsed, TimeoutLayer};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use error::ApiError;
use services::QuoteService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub quotes: Arc<QuoteService>,
}

impl AppState {
    pub fn new(quotes: QuoteService) -> Self {
        Self {
            quotes: Arc::new(quotes),
        }
    }
}

/// Build the full HTTP router.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    let app = Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // REST API routes
        .nest("/api/v1", api_routes());

    with_timeout(app, request_timeout)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Abort requests running longer than `timeout` with an enveloped 408.
fn with_timeout<S>(router: Router<S>, timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .layer(TimeoutLayer::new(timeout)),
    )
}

async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::new(
            StatusCode::REQUEST_TIMEOUT,
            "Request timed out",
            err.to_string(),
        )
    } else {
        tracing::error!("Unhandled middleware error: {}", err);
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Unhandled internal error",
            "internal error",
        )
    }
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/quotes",
            get(handlers::quotes::list).post(handlers::quotes::create),
        )
        .route("/quotes/random", get(handlers::quotes::random))
        .route(
            "/quotes/:id",
            get(handlers::quotes::get)
                .put(handlers::quotes::update)
                .delete(handlers::quotes::delete),
        )
        .route("/quotes/author/:author", get(handlers::quotes::by_author))
        .route(
            "/quotes/category/:category",
            get(handlers::quotes::by_category),
        )
}
