//! API error definitions

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Validation message for a non-string `text` value
pub const MSG_STRING_TYPE: &str = "Input should be a valid string";
/// Validation message for a body that is not a JSON object
pub const MSG_MODEL_ATTRIBUTES: &str =
  "Input should be a valid dictionary or object to extract fields from";
/// Validation message for a missing required field
pub const MSG_MISSING: &str = "Field required";

/// Kind of error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// Request body failed shape validation
  Validation,
  /// An NLP library call failed
  Nlp,
  /// Configuration error
  Config,
  /// Internal error
  Internal,
}

impl ApiErrorKind {
  /// Returns the error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::Validation => "validation_error",
      Self::Nlp => "nlp_error",
      Self::Config => "config_error",
      Self::Internal => "internal_error",
    }
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::Validation => StatusCode::UNPROCESSABLE_ENTITY,
      Self::Nlp | Self::Config | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// One entry of a validation error response
///
/// Mirrors the wire shape expected by API clients: each entry carries the
/// failed check (`type`), a human-readable message (`msg`) and the offending
/// input echoed back (`input`).
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDetail {
  /// Name of the failed check, e.g. `string_type`
  #[serde(rename = "type")]
  pub kind: &'static str,
  /// Human-readable message
  pub msg: &'static str,
  /// The offending input value
  pub input: Value,
}

impl ValidationDetail {
  /// The `text` value was not a string
  #[must_use]
  pub fn string_type(input: Value) -> Self {
    Self { kind: "string_type", msg: MSG_STRING_TYPE, input }
  }

  /// The request body was not a JSON object
  #[must_use]
  pub fn model_attributes(input: Value) -> Self {
    Self { kind: "model_attributes_type", msg: MSG_MODEL_ATTRIBUTES, input }
  }

  /// The required `text` field was absent
  #[must_use]
  pub fn missing(input: Value) -> Self {
    Self { kind: "missing", msg: MSG_MISSING, input }
  }
}

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
  /// Request body failed shape validation
  #[error("request validation failed")]
  Validation(Vec<ValidationDetail>),

  /// An NLP library call failed
  #[error("Failed to {operation} text: {message}")]
  Nlp {
    /// The operation that failed, e.g. `tokenize`
    operation: &'static str,
    /// Stringified library error
    message: String,
  },

  /// Configuration error
  #[error("configuration error: {0}")]
  Config(String),

  /// Internal error
  #[error("internal error: {0}")]
  Internal(String),
}

impl ApiError {
  /// Returns the kind of error
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::Validation(_) => ApiErrorKind::Validation,
      Self::Nlp { .. } => ApiErrorKind::Nlp,
      Self::Config(_) => ApiErrorKind::Config,
      Self::Internal(_) => ApiErrorKind::Internal,
    }
  }

  /// Returns the error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Creates a validation error from detail entries
  #[must_use]
  pub fn validation(details: Vec<ValidationDetail>) -> Self {
    Self::Validation(details)
  }

  /// Creates an NLP operation error
  #[must_use]
  pub fn nlp(operation: &'static str, message: impl Into<String>) -> Self {
    Self::Nlp { operation, message: message.into() }
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }
}

/// JSON body of an error response
///
/// Validation failures carry a structured `detail` array, all other failures
/// a single `detail` message string.
#[derive(Serialize)]
#[serde(untagged)]
enum ErrorResponse {
  Details {
    detail: Vec<ValidationDetail>,
  },
  Message {
    detail: String,
  },
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = match self {
      Self::Validation(details) => ErrorResponse::Details { detail: details },
      other => ErrorResponse::Message { detail: other.to_string() },
    };

    (status, Json(body)).into_response()
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
