//! MP API: a clean, searchable read-only API for the list of nominated
//! Ugandan MPs.
//!
//! The dataset is loaded once at startup and served from memory with
//! pagination, exact filters, substring and fuzzy search, and analytics.

pub mod analytics;
pub mod config;
pub mod dataset;
pub mod error;
pub mod query;
pub mod search;
pub mod web;

pub use config::Settings;
pub use dataset::{Dataset, Mp};
pub use error::AppError;
pub use search::{MpPage, Search};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default page number
pub const DEFAULT_PAGE: usize = 1;

/// Default page size
pub const DEFAULT_LIMIT: usize = 20;

/// Largest page size a client may request
pub const MAX_LIMIT: usize = 100;
