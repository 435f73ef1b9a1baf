use crate::events::EventBuffer;
use crate::upstream::MeetingPlatform;
use anyhow::{Context, Result};
use minijinja::Environment;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Remote meeting platform every meeting call is relayed to
    pub platform: Arc<dyn MeetingPlatform>,

    /// Webhook events received since startup or the last flush
    pub events: EventBuffer,

    /// Landing page and API docs templates
    pub templates: Environment<'static>,

    /// Port number shown on the landing page
    pub landing_port: u16,
}

impl AppState {
    pub fn new(platform: Arc<dyn MeetingPlatform>, landing_port: u16) -> Result<Self> {
        let mut templates = Environment::new();
        templates
            .add_template("index.html", include_str!("../../templates/index.html"))
            .context("Failed to load landing page template")?;
        templates
            .add_template("swagger.html", include_str!("../../templates/swagger.html"))
            .context("Failed to load Swagger UI template")?;
        templates
            .add_template("redoc.html", include_str!("../../templates/redoc.html"))
            .context("Failed to load ReDoc template")?;

        Ok(Self {
            platform,
            events: EventBuffer::new(),
            templates,
            landing_port,
        })
    }
}
