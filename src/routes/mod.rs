// src/routes/mod.rs
pub mod chat;
pub mod contact;

use crate::message::HealthResponse;
use crate::state::SharedState;
use axum::{
    Json, Router,
    http::HeaderValue,
    routing::{get, post},
};
use chat::chat_handler;
use chrono::Utc;
use contact::contact_handler;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/healthz", get(healthz_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/contact", post(contact_handler))
        .layer(TraceLayer::new_for_http())
}

async fn healthz_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        time: Utc::now(),
    })
}

/// Build the CORS layer from the comma-separated origin list. `"*"` (the
/// default) or an empty/unparseable list falls back to allow-all.
pub fn cors_layer(allow_origins: &str) -> CorsLayer {
    if allow_origins.trim() == "*" {
        return CorsLayer::very_permissive();
    }
    let origins: Vec<HeaderValue> = allow_origins
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();
    if origins.is_empty() {
        CorsLayer::very_permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_headers(Any)
            .allow_methods(Any)
    }
}
