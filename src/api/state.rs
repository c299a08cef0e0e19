//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::NlpService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and the NLP service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// NLP delegation service
  ///
  /// - Production: `Arc::new(NlpServiceFull::new(&path)?)`
  /// - Test: `Arc::new(StubNlpService)`
  pub service: Arc<dyn NlpService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn NlpService>) -> Self {
    Self { config, service }
  }
}
