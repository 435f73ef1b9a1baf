use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Why a webhook body could not be turned into an event
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("webhook body is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("webhook body has no `{0}` field")]
    MissingField(&'static str),

    #[error("webhook field `{field}` should be a string, got {found}")]
    WrongType { field: &'static str, found: String },
}

/// A received webhook, reduced to its type and payload id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookEvent {
    pub event_type: String,
    pub payload_id: String,
}

impl WebhookEvent {
    pub fn new(event_type: impl Into<String>, payload_id: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            payload_id: payload_id.into(),
        }
    }

    /// Parse a raw request body
    pub fn from_slice(body: &[u8]) -> Result<Self, WebhookError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(&value)
    }

    /// Pull `event_type` and `payload.id` out of an arbitrary JSON document
    pub fn from_value(value: &Value) -> Result<Self, WebhookError> {
        let event_type = string_field(value.get("event_type"), "event_type")?;
        let payload = value
            .get("payload")
            .ok_or(WebhookError::MissingField("payload"))?;
        let payload_id = string_field(payload.get("id"), "payload.id")?;

        Ok(Self::new(event_type, payload_id))
    }
}

fn string_field<'a>(field: Option<&'a Value>, name: &'static str) -> Result<&'a str, WebhookError> {
    match field {
        None => Err(WebhookError::MissingField(name)),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(WebhookError::WrongType {
            field: name,
            found: json_kind(other).to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Stored form: `"<event_type> <payload_id>"`
impl fmt::Display for WebhookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.event_type, self.payload_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_webhook() {
        let body = br#"{
            "event_type": "meeting.started",
            "payload": { "id": "m1", "room_name": "sales" }
        }"#;

        let event = WebhookEvent::from_slice(body).unwrap();
        assert_eq!(event, WebhookEvent::new("meeting.started", "m1"));
        assert_eq!(event.to_string(), "meeting.started m1");
    }

    #[test]
    fn test_missing_event_type() {
        let err = WebhookEvent::from_slice(br#"{"foo":"bar"}"#).unwrap_err();
        assert!(matches!(err, WebhookError::MissingField("event_type")));
    }

    #[test]
    fn test_missing_payload_id() {
        let err = WebhookEvent::from_slice(br#"{"event_type":"x"}"#).unwrap_err();
        assert!(matches!(err, WebhookError::MissingField("payload")));

        let err = WebhookEvent::from_slice(br#"{"event_type":"x","payload":{}}"#).unwrap_err();
        assert!(matches!(err, WebhookError::MissingField("payload.id")));
    }

    #[test]
    fn test_non_string_fields_rejected() {
        let err =
            WebhookEvent::from_slice(br#"{"event_type":"x","payload":{"id":42}}"#).unwrap_err();
        match err {
            WebhookError::WrongType { field, found } => {
                assert_eq!(field, "payload.id");
                assert_eq!(found, "number");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            WebhookEvent::from_slice(b"not json").unwrap_err(),
            WebhookError::Malformed(_)
        ));
        assert!(matches!(
            WebhookEvent::from_slice(&[0xff, 0xfe]).unwrap_err(),
            WebhookError::Malformed(_)
        ));
        assert!(matches!(
            WebhookEvent::from_slice(b"[1,2]").unwrap_err(),
            WebhookError::MissingField("event_type")
        ));
    }
}
