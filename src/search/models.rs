//! Search response models

use crate::dataset::Mp;
use serde::{Deserialize, Serialize};

/// One page of matching MP records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MpPage {
    /// Requested page number
    pub page: usize,
    /// Requested page size
    pub limit: usize,
    /// Number of records matching the filters, before pagination
    pub total: usize,
    /// `ceil(total / limit)`, zero when nothing matched
    pub total_pages: usize,
    /// Records on this page
    pub results: Vec<Mp>,
}

impl MpPage {
    pub fn new(page: usize, limit: usize, total: usize, results: Vec<Mp>) -> Self {
        Self {
            page,
            limit,
            total,
            total_pages: total_pages(total, limit),
            results,
        }
    }
}

fn total_pages(total: usize, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}
