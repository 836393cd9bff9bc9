//! HTTP inbound adapter: router, shared state, and handlers.

mod error;
mod matchups;
mod pokemon;

pub use error::{ApiError, ApiResult};

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::app::{CatalogBrowser, MatchupResolver};
use crate::config::ServerConfig;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<MatchupResolver>,
    pub browser: Arc<CatalogBrowser>,
}

/// Build the application [`Router`] with its middleware stack.
///
/// Used by both the production binary and the integration tests so they
/// exercise the same request pipeline.
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/pokemon", get(pokemon::list))
        .route("/api/pokemon/{name}", get(pokemon::detail))
        .route("/api/matchups", post(matchups::resolve))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// `GET /health` - liveness probe.
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}
