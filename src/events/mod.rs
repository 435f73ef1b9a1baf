//! Webhook events received from the meeting platform
//!
//! Incoming bodies are reduced to `"<event_type> <payload.id>"` strings and
//! kept in an [`EventBuffer`] until the next flush or process exit.

mod buffer;
mod webhook;

pub use buffer::EventBuffer;
pub use webhook::{WebhookError, WebhookEvent};
