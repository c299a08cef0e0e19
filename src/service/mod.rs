//! Service module

mod nlp_service;

pub use nlp_service::{NlpService, NlpServiceFull};
