//! Relay to the remote meeting platform
//!
//! Four operations, each sent with the static `api_key` / `api_secret`
//! headers. Only a 200 with a JSON body counts as success.

mod client;
mod outcome;

pub use client::{MeetingPlatform, PlatformClient};
pub use outcome::{pretty_json, UpstreamError, UpstreamOutcome, FAILURE_LITERAL};
