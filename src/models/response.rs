//! Response model definitions

use serde::Serialize;

/// One token paired with its part-of-speech tag
///
/// Tags come from the tagger's Penn-Treebank-style inventory. Pairs are
/// emitted one per token, in tokenization order.
#[derive(Debug, Clone, Serialize)]
pub struct TaggedToken {
  /// Surface form of the token
  pub token: String,
  /// Part-of-speech tag
  pub tag: String,
}

/// One recognized entity span
///
/// Serializes as a two-element array `[entity_text, entity_label]`.
/// Multi-word entities are kept as a single span; the label inventory
/// follows the pre-trained recognition model.
#[derive(Debug, Clone, Serialize)]
pub struct EntitySpan(pub String, pub String);

impl EntitySpan {
  /// Text of the entity span
  #[must_use]
  pub fn text(&self) -> &str {
    &self.0
  }

  /// Entity-type label
  #[must_use]
  pub fn label(&self) -> &str {
    &self.1
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tagged_token_serialization() {
    let pair = TaggedToken { token: "Hello".to_string(), tag: "NNP".to_string() };
    let json = serde_json::to_string(&pair).unwrap();
    assert_eq!(json, r#"{"token":"Hello","tag":"NNP"}"#);
  }

  #[test]
  fn entity_span_serializes_as_pair() {
    let entity = EntitySpan("Tim Cook".to_string(), "PER".to_string());
    let json = serde_json::to_string(&entity).unwrap();
    assert_eq!(json, r#"["Tim Cook","PER"]"#);
  }

  #[test]
  fn entity_span_accessors() {
    let entity = EntitySpan("Apple".to_string(), "ORG".to_string());
    assert_eq!(entity.text(), "Apple");
    assert_eq!(entity.label(), "ORG");
  }
}
