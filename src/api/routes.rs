//! Router definition

use axum::{
  Router,
  routing::{get, post},
};

use super::handlers::{health_check, post_ner, post_pos_tag, post_tokenize};
use super::middleware::apply_layers;
use super::state::AppState;
use crate::errors::ApiError;

/// Creates the API router
///
/// The trailing slash on `/tokenize/` is significant; `/tokenize` does not
/// match.
///
/// # Arguments
/// * `state` - Application state
///
/// # Returns
/// Configured Router with the full middleware stack
pub fn create_router(state: AppState) -> Router {
  let router = Router::new()
    .route("/tokenize/", post(post_tokenize))
    .route("/pos_tag", post(post_pos_tag))
    .route("/ner", post(post_ner))
    .route("/health", get(health_check))
    .with_state(state);

  apply_layers(router)
}

/// Starts the server
///
/// # Arguments
/// * `state` - Application state
///
/// # Errors
/// Returns an error if the server fails to start
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = &state.config.bind_addr;
  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .map_err(|e| ApiError::config(format!("failed to bind {addr}: {e}")))?;

  tracing::info!("server listening on http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("server error: {e}")))?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::config::Config;
  use crate::errors::Result as ApiResult;
  use crate::models::{EntitySpan, TaggedToken};
  use crate::service::NlpService;

  /// Dummy implementation that never touches model data
  #[derive(Clone)]
  struct DummyService;

  impl NlpService for DummyService {
    fn tokenize(&self, _text: &str) -> ApiResult<Vec<String>> {
      Ok(Vec::new())
    }

    fn pos_tag(&self, _text: &str) -> ApiResult<Vec<TaggedToken>> {
      Ok(Vec::new())
    }

    fn recognize_entities(&self, _text: &str) -> ApiResult<Vec<EntitySpan>> {
      Ok(Vec::new())
    }
  }

  fn create_test_state() -> AppState {
    let config = Config {
      bind_addr: "127.0.0.1:8001".to_string(),
      data_dir: std::env::temp_dir(),
    };

    // Inject the stub (no model load required)
    let service = Arc::new(DummyService) as Arc<dyn NlpService>;
    AppState::new(config, service)
  }

  #[test]
  fn test_router_creation() {
    let state = create_test_state();
    let _router = create_router(state);
    // Confirm the router is built without panicking
  }
}
