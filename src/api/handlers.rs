//! HTTP handler definitions

use axum::{Json, extract::State};
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{EntitySpan, TaggedToken};

use super::extract::TextJson;
use super::state::AppState;

/// POST /tokenize/ endpoint
///
/// Splits the text into word-level tokens, punctuation as separate tokens.
///
/// # Request Body
/// ```json
/// { "text": "Hello world!" }
/// ```
///
/// # Response
/// - 200 OK: ordered array of token strings
/// - 422 Unprocessable Entity: body failed shape validation
/// - 500 Internal Server Error: tokenizer failure
pub async fn post_tokenize(
  State(state): State<AppState>,
  TextJson(request): TextJson,
) -> Result<Json<Vec<String>>, ApiError> {
  debug!(text_len = request.text.len(), "tokenize request received");

  // The library call is synchronous; run it on the blocking pool so it
  // cannot stall unrelated in-flight requests.
  let service = state.service.clone();

  let tokens = tokio::task::spawn_blocking(move || service.tokenize(&request.text))
    .await
    .map_err(|e| {
      error!(error = %e, "tokenize task failed");
      ApiError::nlp("tokenize", e.to_string())
    })??;

  info!(token_count = tokens.len(), "tokenization complete");

  Ok(Json(tokens))
}

/// POST /pos_tag endpoint
///
/// Tokenizes the text and tags each token with a part-of-speech label. The
/// tagger operates on the tokenizer's own sequence, so pairs are one-to-one
/// with `/tokenize/` output, order preserved.
///
/// # Response
/// - 200 OK: ordered array of `{"token", "tag"}` pairs
/// - 422 Unprocessable Entity: body failed shape validation
/// - 500 Internal Server Error: tagger failure
pub async fn post_pos_tag(
  State(state): State<AppState>,
  TextJson(request): TextJson,
) -> Result<Json<Vec<TaggedToken>>, ApiError> {
  debug!(text_len = request.text.len(), "pos_tag request received");

  let service = state.service.clone();

  let pairs = tokio::task::spawn_blocking(move || service.pos_tag(&request.text))
    .await
    .map_err(|e| {
      error!(error = %e, "pos_tag task failed");
      ApiError::nlp("tag", e.to_string())
    })??;

  info!(pair_count = pairs.len(), "tagging complete");

  Ok(Json(pairs))
}

/// POST /ner endpoint
///
/// Runs the text through the separately loaded recognition pipeline, which
/// performs its own internal tokenization. Multi-word entities come back as
/// single spans, in pipeline output order.
///
/// # Response
/// - 200 OK: ordered array of `[entity_text, entity_label]` pairs
/// - 422 Unprocessable Entity: body failed shape validation
/// - 500 Internal Server Error: pipeline failure
pub async fn post_ner(
  State(state): State<AppState>,
  TextJson(request): TextJson,
) -> Result<Json<Vec<EntitySpan>>, ApiError> {
  debug!(text_len = request.text.len(), "ner request received");

  let service = state.service.clone();

  let entities = tokio::task::spawn_blocking(move || service.recognize_entities(&request.text))
    .await
    .map_err(|e| {
      error!(error = %e, "ner task failed");
      ApiError::nlp("extract entities from", e.to_string())
    })??;

  info!(entity_count = entities.len(), "entity recognition complete");

  Ok(Json(entities))
}

/// Health check endpoint
///
/// Confirms the server is up.
pub async fn health_check() -> &'static str {
  "OK"
}
