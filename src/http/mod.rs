//! HTTP API server
//!
//! - GET /ping - Liveness check
//! - GET / - Landing page
//! - POST /webhook - Record a platform webhook
//! - GET /events - Buffered webhook events
//! - GET /flush_events - Clear buffered events
//! - POST /create_meeting - Create a meeting upstream
//! - GET /start_meeting/:id, /end_meeting/:id, /get_meeting_document/:id
//! - GET /openapi.json, /docs, /redoc - API description and viewers

mod docs;
mod error;
mod handlers;
mod routes;
mod state;

pub use docs::ApiDoc;
pub use error::{ApiError, ValidationDetail, ValidationErrorBody};
pub use handlers::Pong;
pub use routes::create_router;
pub use state::AppState;
