//! Query engine
//!
//! Applies exact filters, substring search and fuzzy search to the dataset,
//! then paginates the matches in load order.

mod executor;
pub mod fuzzy;
mod models;

pub use executor::Search;
pub use fuzzy::FuzzyMatcher;
pub use models::*;
