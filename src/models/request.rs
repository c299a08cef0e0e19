//! Request model definitions

use serde::Deserialize;

/// NLP operation request
///
/// One string field, no length or content constraint.
#[derive(Debug, Deserialize)]
pub struct TextRequest {
  /// Text to process
  pub text: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_valid_request() {
    let json = r#"{"text": "Hello world!"}"#;
    let req: TextRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.text, "Hello world!");
  }

  #[test]
  fn deserialize_empty_text() {
    let json = r#"{"text": ""}"#;
    let req: TextRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.text, "");
  }

  #[test]
  fn deserialize_non_string_text_fails() {
    let json = r#"{"text": 123}"#;
    assert!(serde_json::from_str::<TextRequest>(json).is_err());
  }
}
