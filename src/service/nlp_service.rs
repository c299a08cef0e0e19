//! NLP delegation service

use std::path::Path;
use std::sync::Mutex;

use nlprule::Tokenizer;
use rust_bert::pipelines::ner::NERModel;

use crate::errors::{ApiError, Result};
use crate::models::{EntitySpan, TaggedToken};

/// Common interface for the NLP operations exposed over HTTP
///
/// This trait allows swapping the production implementation
/// (`NlpServiceFull`) with test stubs/mocks.
pub trait NlpService: Send + Sync {
  /// Splits text into word-level tokens, punctuation as separate tokens
  ///
  /// # Errors
  /// Returns an error if the tokenizer call fails
  fn tokenize(&self, text: &str) -> Result<Vec<String>>;

  /// Tags each token of the tokenizer's sequence with a part-of-speech label
  ///
  /// # Errors
  /// Returns an error if the tagger call fails
  fn pos_tag(&self, text: &str) -> Result<Vec<TaggedToken>>;

  /// Runs the entity-recognition pipeline over the raw text
  ///
  /// # Errors
  /// Returns an error if the recognition pipeline fails
  fn recognize_entities(&self, text: &str) -> Result<Vec<EntitySpan>>;
}

/// NLP service backed by the real pre-trained models
///
/// Holds the nlprule tokenizer/tagger and the rust-bert recognition
/// pipeline. Both are loaded once at startup and only read afterwards. The
/// recognition model is `Send` but not `Sync`, so it sits behind a `Mutex`.
pub struct NlpServiceFull {
  /// nlprule tokenizer, also carries the POS tagger
  tokenizer: Tokenizer,
  /// rust-bert token-classification pipeline
  ner: Mutex<NERModel>,
}

impl NlpServiceFull {
  /// Initializes the service
  ///
  /// Loads the tokenizer from the bootstrapped data package and constructs
  /// the recognition pipeline, letting rust-bert resolve (and on the first
  /// run download) its pre-trained model bundle.
  ///
  /// Must not be called on an async worker thread: rust-bert resolves its
  /// resources through a blocking HTTP client, which panics inside a tokio
  /// runtime. Run construction on `tokio::task::spawn_blocking` or a
  /// dedicated thread.
  ///
  /// # Errors
  /// Returns an error if either model fails to load
  pub fn new(tokenizer_path: &Path) -> Result<Self> {
    let tokenizer = Tokenizer::new(tokenizer_path).map_err(|e| {
      ApiError::config(format!(
        "failed to load tokenizer data from {}: {e}",
        tokenizer_path.display()
      ))
    })?;

    let ner = NERModel::new(Default::default())
      .map_err(|e| ApiError::config(format!("failed to load entity recognition model: {e}")))?;

    Ok(Self { tokenizer, ner: Mutex::new(ner) })
  }

  /// Splits text into tokens, in input order
  pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    for sentence in self.tokenizer.pipe(text) {
      for token in sentence.tokens() {
        tokens.push(token.word().text().as_str().to_string());
      }
    }
    Ok(tokens)
  }

  /// Tags the tokenizer's token sequence, one pair per token
  pub fn pos_tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
    let mut pairs = Vec::new();
    for sentence in self.tokenizer.pipe(text) {
      for token in sentence.tokens() {
        let tag = token
          .word()
          .tags()
          .first()
          .map(|data| data.pos().as_str().to_string())
          .unwrap_or_default();

        pairs.push(TaggedToken { token: token.word().text().as_str().to_string(), tag });
      }
    }
    Ok(pairs)
  }

  /// Runs entity recognition, consolidating multi-word entities into spans
  pub fn recognize_entities(&self, text: &str) -> Result<Vec<EntitySpan>> {
    let model = self
      .ner
      .lock()
      .map_err(|e| ApiError::nlp("extract entities from", e.to_string()))?;

    let mut batches = model.predict_full_entities(&[text]);
    let entities = batches.pop().unwrap_or_default();

    Ok(entities.into_iter().map(|entity| EntitySpan(entity.word, entity.label)).collect())
  }
}

/// Production implementation of trait `NlpService`
impl NlpService for NlpServiceFull {
  fn tokenize(&self, text: &str) -> Result<Vec<String>> {
    NlpServiceFull::tokenize(self, text)
  }

  fn pos_tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
    NlpServiceFull::pos_tag(self, text)
  }

  fn recognize_entities(&self, text: &str) -> Result<Vec<EntitySpan>> {
    NlpServiceFull::recognize_entities(self, text)
  }
}
