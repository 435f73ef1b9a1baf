use super::webhook::WebhookEvent;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory, append-only record of received webhooks
///
/// Lives for the process lifetime. Every operation takes the same lock, so
/// concurrent appends never interleave and a reset never tears an append.
#[derive(Debug, Clone, Default)]
pub struct EventBuffer {
    events: Arc<Mutex<Vec<String>>>,
}

impl EventBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event at the end, returning the new length
    pub async fn append(&self, event: &WebhookEvent) -> usize {
        let mut events = self.events.lock().await;
        events.push(event.to_string());
        events.len()
    }

    /// Snapshot of every event in arrival order
    pub async fn list(&self) -> Vec<String> {
        self.events.lock().await.clone()
    }

    /// Drop every event and return what is left (always empty)
    pub async fn reset(&self) -> Vec<String> {
        let mut events = self.events.lock().await;
        events.clear();
        events.clone()
    }

    pub async fn len(&self) -> usize {
        self.events.lock().await.len()
    }
}
