pub mod config;
pub mod events;
pub mod http;
pub mod models;
pub mod upstream;

pub use config::Config;
pub use events::{EventBuffer, WebhookError, WebhookEvent};
pub use http::{create_router, ApiDoc, AppState};
pub use models::{DurationMode, MeetingCreateRequest, MeetingType};
pub use upstream::{MeetingPlatform, PlatformClient, UpstreamOutcome};
