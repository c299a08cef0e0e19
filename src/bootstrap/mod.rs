//! Bootstrap module

pub mod package_manager;

pub use package_manager::{DataPackageManager, REQUIRED_PACKAGES, TOKENIZER_PACKAGE};
