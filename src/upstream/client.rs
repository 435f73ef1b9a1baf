use super::outcome::{pretty_json, UpstreamError, UpstreamOutcome};
use crate::config::UpstreamConfig;
use crate::models::MeetingCreateRequest;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde_json::Value;
use tracing::{debug, info};

/// Meeting operations offered by the remote platform
///
/// Implementations never return an error: every failure is folded into
/// [`UpstreamOutcome::Failed`].
#[async_trait]
pub trait MeetingPlatform: Send + Sync {
    async fn create_meeting(&self, request: &MeetingCreateRequest) -> UpstreamOutcome;

    async fn start_meeting(&self, meeting_id: &str) -> UpstreamOutcome;

    async fn end_meeting(&self, meeting_id: &str) -> UpstreamOutcome;

    /// On success the body is a pretty-printed JSON string, not the raw document
    async fn get_meeting_document(&self, meeting_id: &str) -> UpstreamOutcome;
}

/// HTTP client for the meeting platform API
pub struct PlatformClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    api_secret: String,
}

impl PlatformClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("meeting-relay/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        let client = Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
        };
        info!("Relaying meeting calls to {}", client.base_url());

        Ok(client)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, action: &str, meeting_id: &str) -> String {
        format!("{}/{}/{}", self.base_url, action, meeting_id)
    }

    /// Attach credentials, send, and accept only a 200 with a JSON body
    async fn send(&self, request: RequestBuilder) -> Result<Value, UpstreamError> {
        let response = request
            .header("api_key", &self.api_key)
            .header("api_secret", &self.api_secret)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(UpstreamError::Status(status));
        }

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;
        debug!("Upstream body: {}", body);

        Ok(body)
    }
}

#[async_trait]
impl MeetingPlatform for PlatformClient {
    async fn create_meeting(&self, request: &MeetingCreateRequest) -> UpstreamOutcome {
        info!("Creating {} meeting upstream", request.meeting_type);
        let result = self.send(self.http.post(&self.base_url).json(request)).await;
        UpstreamOutcome::from_result("create_meeting", result)
    }

    async fn start_meeting(&self, meeting_id: &str) -> UpstreamOutcome {
        info!("Starting meeting {}", meeting_id);
        let result = self.send(self.http.get(self.url("start", meeting_id))).await;
        UpstreamOutcome::from_result("start_meeting", result)
    }

    async fn end_meeting(&self, meeting_id: &str) -> UpstreamOutcome {
        info!("Ending meeting {}", meeting_id);
        let result = self.send(self.http.get(self.url("end", meeting_id))).await;
        UpstreamOutcome::from_result("end_meeting", result)
    }

    async fn get_meeting_document(&self, meeting_id: &str) -> UpstreamOutcome {
        info!("Fetching document for meeting {}", meeting_id);
        let result = self
            .send(self.http.get(self.url("meeting_document", meeting_id)))
            .await;
        UpstreamOutcome::from_result("get_meeting_document", result)
            .map(|document| Value::String(pretty_json(&document)))
    }
}
