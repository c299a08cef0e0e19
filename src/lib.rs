//! lexeme-api crate
//!
//! Web server exposing natural-language-processing operations as an HTTP API.
//! Tokenization and part-of-speech tagging are delegated to `nlprule`,
//! named-entity recognition to a `rust-bert` token-classification pipeline.
//!
//! ## Endpoints
//! - `POST /tokenize/` - Word tokenization
//! - `POST /pos_tag` - Part-of-speech tagging
//! - `POST /ner` - Named-entity recognition
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:8000/pos_tag \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "Hello world!"}'
//! ```

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use bootstrap::DataPackageManager;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind, ValidationDetail};
pub use models::{EntitySpan, TaggedToken, TextRequest};
pub use service::NlpServiceFull;
