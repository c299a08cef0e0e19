//! Request validation extractor

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use serde_json::Value;

use crate::errors::{ApiError, ValidationDetail};
use crate::models::TextRequest;

/// Validated JSON body of an NLP request
///
/// The only input-shape enforcement in the system: the body must be a JSON
/// object whose `text` key maps to a string. Everything else is rejected
/// with a 422 carrying structured `ValidationDetail` entries before any
/// handler code runs.
pub struct TextJson(pub TextRequest);

impl<S> FromRequest<S> for TextJson
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
    let is_json = req
      .headers()
      .get(CONTENT_TYPE)
      .and_then(|value| value.to_str().ok())
      .is_some_and(is_json_content_type);

    let bytes = axum::body::to_bytes(req.into_body(), usize::MAX)
      .await
      .map_err(|e| ApiError::internal(format!("failed to read request body: {e}")))?;

    if !is_json {
      // e.g. a form-encoded body; echo the raw payload back as the input
      return Err(ApiError::validation(vec![ValidationDetail::model_attributes(raw_input(
        &bytes,
      ))]));
    }

    parse_text_request(&bytes).map(TextJson).map_err(ApiError::validation)
  }
}

/// Whether the declared media type is JSON (`application/json` or `+json`)
fn is_json_content_type(content_type: &str) -> bool {
  let mime = content_type.split(';').next().unwrap_or_default().trim();
  mime.eq_ignore_ascii_case("application/json")
    || mime.rsplit_once('+').is_some_and(|(_, suffix)| suffix.eq_ignore_ascii_case("json"))
}

/// Shape-validates the raw JSON body into a `TextRequest`
fn parse_text_request(bytes: &[u8]) -> Result<TextRequest, Vec<ValidationDetail>> {
  let value: Value = match serde_json::from_slice(bytes) {
    Ok(value) => value,
    Err(_) => return Err(vec![ValidationDetail::model_attributes(raw_input(bytes))]),
  };

  let Value::Object(fields) = &value else {
    return Err(vec![ValidationDetail::model_attributes(value.clone())]);
  };

  match fields.get("text") {
    Some(Value::String(text)) => Ok(TextRequest { text: text.clone() }),
    Some(other) => Err(vec![ValidationDetail::string_type(other.clone())]),
    None => Err(vec![ValidationDetail::missing(value.clone())]),
  }
}

/// Echoes an unparseable body as a string input value
fn raw_input(bytes: &[u8]) -> Value {
  Value::String(String::from_utf8_lossy(bytes).into_owned())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_string_text() {
    let req = parse_text_request(br#"{"text": "Hello world!"}"#).unwrap();
    assert_eq!(req.text, "Hello world!");
  }

  #[test]
  fn rejects_integer_text() {
    let details = parse_text_request(br#"{"text": 123}"#).unwrap_err();
    assert_eq!(details[0].kind, "string_type");
    assert_eq!(details[0].input, Value::from(123));
  }

  #[test]
  fn rejects_array_text() {
    let details = parse_text_request(br#"{"text": ["This", "is", "an", "array"]}"#).unwrap_err();
    assert_eq!(details[0].kind, "string_type");
    assert!(details[0].input.is_array());
  }

  #[test]
  fn rejects_missing_text_field() {
    let details = parse_text_request(br#"{"other": "value"}"#).unwrap_err();
    assert_eq!(details[0].kind, "missing");
  }

  #[test]
  fn rejects_non_object_body() {
    let details = parse_text_request(br#""just a string""#).unwrap_err();
    assert_eq!(details[0].kind, "model_attributes_type");
  }

  #[test]
  fn rejects_invalid_json_and_echoes_raw_body() {
    let details = parse_text_request(b"text=This+is+a+test.").unwrap_err();
    assert_eq!(details[0].kind, "model_attributes_type");
    let input = details[0].input.as_str().unwrap();
    assert!(input.contains("text"));
  }

  #[test]
  fn json_content_type_detection() {
    assert!(is_json_content_type("application/json"));
    assert!(is_json_content_type("application/json; charset=utf-8"));
    assert!(is_json_content_type("application/problem+json"));
    assert!(!is_json_content_type("application/x-www-form-urlencoded"));
    assert!(!is_json_content_type("text/plain"));
  }
}
