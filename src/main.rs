//! lexeme-api server entry point

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lexeme_api::ApiError;
use lexeme_api::api::AppState;
use lexeme_api::api::run_server;
use lexeme_api::bootstrap::DataPackageManager;
use lexeme_api::config::Config;
use lexeme_api::service::NlpServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // Logging initialization
  tracing_subscriber::registry().with(tracing_subscriber::fmt::layer()).init();

  // Configuration loading
  let config = Config::from_env()?;
  tracing::info!(data_dir = %config.data_dir.display(), "configuration loaded");

  // Ensure NLP data packages are present before anything loads them
  let packages = DataPackageManager::new(config.data_dir.clone());
  packages.ensure_all().await?;
  tracing::info!("data packages ready");

  // Service initialization (loads both models, downloads on first run).
  // Model resource resolution uses a blocking HTTP client internally, so
  // construction must not run on an async worker thread.
  let tokenizer_path = packages.tokenizer_path();
  let service = tokio::task::spawn_blocking(move || NlpServiceFull::new(&tokenizer_path))
    .await
    .map_err(|e| ApiError::internal(format!("model load task failed: {e}")))??;
  let service = Arc::new(service);
  tracing::info!("NLP service initialized");

  // Application state creation
  let state = AppState::new(config, service);

  // Server startup
  run_server(state).await
}
