//! MP dataset
//!
//! The record set is read once from a JSON array at startup, deduplicated,
//! and never mutated afterwards. Handlers share it behind an `Arc`.

mod record;

pub use record::Mp;

use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that prevent the dataset from loading
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read MP data from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse MP data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable, deduplicated collection of MP records in load order
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Mp>,
    /// id -> position in `records`
    by_id: HashMap<u32, usize>,
}

impl Dataset {
    /// Load and deduplicate records from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let dataset = Self::from_json(&content)?;
        info!(
            "Successfully loaded {} MP records from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Parse and deduplicate records from a JSON array string
    pub fn from_json(content: &str) -> Result<Self, DatasetError> {
        let records: Vec<Mp> = serde_json::from_str(content)?;
        Ok(Self::from_records(records))
    }

    /// Build a dataset, dropping records whose id or identity key repeats.
    /// The first occurrence wins.
    pub fn from_records(records: Vec<Mp>) -> Self {
        let mut seen_keys = HashSet::new();
        let mut by_id = HashMap::with_capacity(records.len());
        let mut kept = Vec::with_capacity(records.len());

        for mp in records {
            if by_id.contains_key(&mp.id) {
                warn!("Dropping MP record with duplicate id {}: {}", mp.id, mp.name);
                continue;
            }
            if !seen_keys.insert(mp.identity_key()) {
                warn!(
                    "Dropping duplicate MP record {} ({}, {})",
                    mp.id, mp.name, mp.constituency
                );
                continue;
            }
            by_id.insert(mp.id, kept.len());
            kept.push(mp);
        }

        if kept.is_empty() {
            warn!("MP dataset is empty");
        }

        Self {
            records: kept,
            by_id,
        }
    }

    /// All records in load order
    pub fn records(&self) -> &[Mp] {
        &self.records
    }

    /// Look up a record by id
    pub fn get(&self, id: u32) -> Option<&Mp> {
        self.by_id.get(&id).map(|&idx| &self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
