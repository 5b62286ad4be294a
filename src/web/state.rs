//! Application state shared across handlers

use crate::analytics::Analytics;
use crate::dataset::Dataset;
use crate::search::Search;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Query engine over the loaded dataset
    pub search: Arc<Search>,
    /// Analytics computed at load time
    pub analytics: Arc<Analytics>,
}

impl AppState {
    /// Create new application state from a loaded dataset
    pub fn new(dataset: Dataset) -> Self {
        let dataset = Arc::new(dataset);
        let analytics = Arc::new(Analytics::from_dataset(&dataset));
        let search = Arc::new(Search::new(dataset));

        Self { search, analytics }
    }

    /// Number of records being served
    pub fn record_count(&self) -> usize {
        self.search.dataset().len()
    }
}
