//! API description generated from the handler annotations, plus the two
//! browser front-ends that render it.

use super::error::{ApiError, ValidationDetail, ValidationErrorBody};
use super::handlers;
use super::state::AppState;
use crate::models::{
    DurationMode, MeetingCreateRequest, MeetingSourceType, MeetingStatus, MeetingType,
    MeetingUserType, TransactionalType,
};
use axum::{
    extract::State,
    response::{Html, IntoResponse, Json},
};
use minijinja::context;
use utoipa::OpenApi;

pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "SaleAssist Internal API", version = "1"),
    paths(
        handlers::ping,
        handlers::homepage,
        handlers::capture_event,
        handlers::list_events,
        handlers::flush_events,
        handlers::create_meeting,
        handlers::start_meeting,
        handlers::end_meeting,
        handlers::get_meeting_document,
    ),
    components(schemas(
        handlers::Pong,
        MeetingCreateRequest,
        MeetingType,
        DurationMode,
        MeetingStatus,
        MeetingUserType,
        MeetingSourceType,
        TransactionalType,
        ValidationErrorBody,
        ValidationDetail,
    ))
)]
pub struct ApiDoc;

/// GET /openapi.json
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// GET /docs
pub async fn swagger_ui(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render_viewer(&state, "swagger.html", "docs")
}

/// GET /redoc
pub async fn redoc(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render_viewer(&state, "redoc.html", "redoc")
}

fn render_viewer(state: &AppState, template: &str, title: &str) -> Result<Html<String>, ApiError> {
    let html = state
        .templates
        .get_template(template)?
        .render(context! { title => title, openapi_url => OPENAPI_PATH })?;
    Ok(Html(html))
}
