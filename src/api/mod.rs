//! HTTP surface: router assembly and handlers.

pub mod chat;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router. CORS is wide open because the service is
/// consumed by browser frontends on other origins.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(chat::health))
        .route("/chat", post(chat::chat))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
