//! Config module

mod constants;
mod env;

pub use constants::{DATA_DIR_NAME, DEFAULT_BIND_ADDR};
pub use env::Config;
