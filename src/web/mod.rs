//! Web server module
//!
//! Provides the read-only HTTP API over the MP dataset.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
