use super::docs;
use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Service
        .route("/ping", get(handlers::ping))
        .route("/", get(handlers::homepage))
        // Webhook events
        .route("/webhook", post(handlers::capture_event))
        .route("/events", get(handlers::list_events))
        .route("/flush_events", get(handlers::flush_events))
        // Meeting relay
        .route("/create_meeting", post(handlers::create_meeting))
        .route("/start_meeting/:meeting_id", get(handlers::start_meeting))
        .route("/end_meeting/:meeting_id", get(handlers::end_meeting))
        .route(
            "/get_meeting_document/:meeting_id",
            get(handlers::get_meeting_document),
        )
        // API docs
        .route(docs::OPENAPI_PATH, get(docs::openapi_json))
        .route("/docs", get(docs::swagger_ui))
        .route("/redoc", get(docs::redoc))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
