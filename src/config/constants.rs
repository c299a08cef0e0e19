//! Constant definitions for the API configuration

/// Default bind address
///
/// Standard localhost port for development use.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Name of the per-user data directory holding downloaded NLP data packages
///
/// Resolved under the OS cache directory, e.g. `~/.cache/lexeme-api` on
/// Linux.
pub const DATA_DIR_NAME: &str = "lexeme-api";
