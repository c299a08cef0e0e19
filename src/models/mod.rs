//! Model module

mod request;
mod response;

pub use request::TextRequest;
pub use response::{EntitySpan, TaggedToken};
