use super::error::ApiError;
use super::state::AppState;
use crate::events::WebhookEvent;
use crate::models::MeetingCreateRequest;
use crate::upstream::UpstreamOutcome;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Json},
};
use minijinja::context;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Pong {
    pub ping: String,
}

// ============================================================================
// Service endpoints
// ============================================================================

/// GET /ping
/// Liveness check
#[utoipa::path(get, path = "/ping", responses((status = 200, description = "Service is up", body = Pong)))]
pub async fn ping() -> impl IntoResponse {
    Json(Pong {
        ping: "pong!".to_string(),
    })
}

/// GET /
/// Landing page
#[utoipa::path(get, path = "/", responses((status = 200, description = "HTML landing page")))]
pub async fn homepage(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let template = state.templates.get_template("index.html")?;
    let html = template.render(context! { port => state.landing_port })?;
    Ok(Html(html))
}

// ============================================================================
// Webhook events
// ============================================================================

/// POST /webhook
/// Record a platform webhook. Always answers `true`, even for bodies that
/// could not be parsed (those are logged and dropped).
#[utoipa::path(post, path = "/webhook", responses((status = 200, description = "Always true", body = bool)))]
pub async fn capture_event(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    match WebhookEvent::from_slice(&body) {
        Ok(event) => {
            let count = state.events.append(&event).await;
            info!("Recorded webhook event '{}' ({} buffered)", event, count);
        }
        Err(e) => {
            warn!(
                "Ignoring webhook: {} (body: {})",
                e,
                String::from_utf8_lossy(&body)
            );
        }
    }

    Json(true)
}

/// GET /events
/// Events received so far, oldest first
#[utoipa::path(get, path = "/events", responses((status = 200, description = "Buffered events", body = Vec<String>)))]
pub async fn list_events(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.events.list().await)
}

/// GET /flush_events
/// Drop every buffered event
#[utoipa::path(get, path = "/flush_events", responses((status = 200, description = "Empty event list", body = Vec<String>)))]
pub async fn flush_events(State(state): State<AppState>) -> impl IntoResponse {
    let dropped = state.events.len().await;
    let events = state.events.reset().await;
    info!("Flushed {} webhook events", dropped);
    Json(events)
}

// ============================================================================
// Meeting relay
// ============================================================================

/// POST /create_meeting
/// Validate and forward a new meeting to the platform
#[utoipa::path(
    post,
    path = "/create_meeting",
    request_body = MeetingCreateRequest,
    responses(
        (status = 200, description = "Upstream body, or the string \"failed\""),
        (status = 422, description = "Request body does not match the schema", body = super::error::ValidationErrorBody)
    )
)]
pub async fn create_meeting(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let request = parse_create_request(&headers, &body).map_err(|e| {
        warn!("Rejected create_meeting body: {}", e);
        e
    })?;

    let outcome = state.platform.create_meeting(&request).await;
    Ok(relay("create_meeting", outcome))
}

/// A body without a content type is read as JSON; any other non-JSON type is refused
fn parse_create_request(headers: &HeaderMap, body: &[u8]) -> Result<MeetingCreateRequest, ApiError> {
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        let content_type = content_type.to_str().unwrap_or_default();
        if !is_json_content_type(content_type) {
            return Err(ApiError::unsupported_content_type(content_type));
        }
    }

    Ok(serde_json::from_slice(body)?)
}

fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

fn relay(operation: &str, outcome: UpstreamOutcome) -> Json<serde_json::Value> {
    if !outcome.is_success() {
        info!("Relaying failure of {} to caller", operation);
    }
    Json(outcome.into_body())
}

/// GET /start_meeting/:meeting_id
#[utoipa::path(
    get,
    path = "/start_meeting/{meeting_id}",
    params(("meeting_id" = String, Path, description = "Platform meeting id")),
    responses((status = 200, description = "Upstream body, or the string \"failed\""))
)]
pub async fn start_meeting(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
) -> impl IntoResponse {
    relay("start_meeting", state.platform.start_meeting(&meeting_id).await)
}

/// GET /end_meeting/:meeting_id
#[utoipa::path(
    get,
    path = "/end_meeting/{meeting_id}",
    params(("meeting_id" = String, Path, description = "Platform meeting id")),
    responses((status = 200, description = "Upstream body, or the string \"failed\""))
)]
pub async fn end_meeting(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
) -> impl IntoResponse {
    relay("end_meeting", state.platform.end_meeting(&meeting_id).await)
}

/// GET /get_meeting_document/:meeting_id
/// The document comes back as a pretty-printed JSON string
#[utoipa::path(
    get,
    path = "/get_meeting_document/{meeting_id}",
    params(("meeting_id" = String, Path, description = "Platform meeting id")),
    responses((status = 200, description = "Document as a JSON string, or the string \"failed\"", body = String))
)]
pub async fn get_meeting_document(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
) -> impl IntoResponse {
    relay(
        "get_meeting_document",
        state.platform.get_meeting_document(&meeting_id).await,
    )
}
