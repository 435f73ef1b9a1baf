use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// One entry of a validation error body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidationDetail {
    /// Where the problem is, e.g. `["body"]`
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Body returned with 422 when a request does not match its schema
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorBody {
    pub detail: Vec<ValidationDetail>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request body: {msg}")]
    Validation { kind: &'static str, msg: String },

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl ApiError {
    pub fn unsupported_content_type(content_type: &str) -> Self {
        ApiError::Validation {
            kind: "unsupported_content_type",
            msg: format!("Expected a JSON body, got Content-Type `{}`", content_type),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        let kind = match err.classify() {
            Category::Data => "value_error",
            Category::Syntax | Category::Eof => "json_invalid",
            Category::Io => "body_error",
        };

        ApiError::Validation {
            kind,
            msg: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation { kind, msg } => {
                let body = ValidationErrorBody {
                    detail: vec![ValidationDetail {
                        loc: vec!["body".to_string()],
                        msg,
                        kind: kind.to_string(),
                    }],
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            ApiError::Template(e) => {
                error!("Failed to render template: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "template error").into_response()
            }
        }
    }
}
