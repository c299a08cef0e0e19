//! API module

mod extract;
mod handlers;
mod middleware;
mod routes;
mod state;

pub use routes::{create_router, run_server};
pub use state::AppState;
