use reqwest::StatusCode;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::{Serializer, Value};
use std::io;
use thiserror::Error;
use tracing::warn;

/// String returned to callers in place of any upstream error
pub const FAILURE_LITERAL: &str = "failed";

/// Why an upstream call did not produce a usable body
///
/// Only used for logging. Callers see [`UpstreamOutcome::Failed`] for all of them.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream replied with status {0}")]
    Status(StatusCode),

    #[error("upstream body is not JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Result of relaying one call to the meeting platform
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamOutcome {
    /// Upstream answered 200 with this JSON body
    Success(Value),
    /// Anything else: non-200 status, unreachable host, unreadable body
    Failed,
}

impl UpstreamOutcome {
    /// Collapse a call result, logging the cause of any failure
    pub fn from_result(operation: &str, result: Result<Value, UpstreamError>) -> Self {
        match result {
            Ok(body) => UpstreamOutcome::Success(body),
            Err(e) => {
                warn!("Upstream {} failed: {}", operation, e);
                UpstreamOutcome::Failed
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UpstreamOutcome::Success(_))
    }

    pub fn map(self, f: impl FnOnce(Value) -> Value) -> Self {
        match self {
            UpstreamOutcome::Success(body) => UpstreamOutcome::Success(f(body)),
            UpstreamOutcome::Failed => UpstreamOutcome::Failed,
        }
    }

    /// JSON value sent back to our own caller
    pub fn into_body(self) -> Value {
        match self {
            UpstreamOutcome::Success(body) => body,
            UpstreamOutcome::Failed => Value::String(FAILURE_LITERAL.to_string()),
        }
    }
}

/// Pretty printer that writes every non-ASCII character as a `\uXXXX` escape
struct AsciiPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> Formatter for AsciiPrettyFormatter<'a> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units).iter() {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Render `value` as a JSON string indented by four spaces, non-ASCII escaped
pub fn pretty_json(value: &Value) -> String {
    let mut buf = Vec::new();
    let formatter = AsciiPrettyFormatter {
        inner: PrettyFormatter::with_indent(b"    "),
    };
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    // Writing a Value into a Vec cannot fail
    if value.serialize(&mut ser).is_err() {
        return value.to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| value.to_string())
}
