//! Dataset analytics
//!
//! Computed once when the dataset loads; the data never changes afterwards.

use crate::dataset::Dataset;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Record totals and party distribution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    /// Number of records in the deduplicated dataset
    pub total: usize,
    /// Party code -> record count, most common first
    pub by_party: IndexMap<String, usize>,
}

impl Analytics {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for mp in dataset.records() {
            *counts.entry(mp.party.trim()).or_insert(0) += 1;
        }

        let mut parties: Vec<(&str, usize)> = counts.into_iter().collect();
        // Descending count, ties by code so the order is stable
        parties.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        Self {
            total: dataset.len(),
            by_party: parties
                .into_iter()
                .map(|(party, count)| (party.to_string(), count))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Mp;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            Mp::new(1, "John Doe", "Kampala Central", "NUP"),
            Mp::new(2, "Cassiano Okello", "Arua Central", "FDC"),
            Mp::new(3, "Grace Mukasa", "Mukono Municipality", "NRM"),
            Mp::new(4, "Agnes Nalubega", "Kampala Central", "NRM"),
            Mp::new(5, "Moses Wandera", "Bugiri Municipality", "IND"),
            Mp::new(6, "Esther Atim", "Lira City East", "NRM"),
            Mp::new(7, "Peter Ssemwogerere", "Kawempe North", "NUP"),
            // duplicate of id 1 under another id
            Mp::new(8, "John Doe", "Kampala Central", "NUP"),
        ])
    }

    #[test]
    fn test_counts_sum_to_total() {
        let analytics = Analytics::from_dataset(&dataset());
        assert_eq!(analytics.total, 7);
        assert_eq!(analytics.by_party.values().sum::<usize>(), analytics.total);
    }

    #[test]
    fn test_ordering_most_common_first() {
        let analytics = Analytics::from_dataset(&dataset());
        let order: Vec<&str> = analytics.by_party.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["NRM", "NUP", "FDC", "IND"]);
        assert_eq!(analytics.by_party["NRM"], 3);
    }

    #[test]
    fn test_empty_dataset() {
        let analytics = Analytics::from_dataset(&Dataset::default());
        assert_eq!(analytics.total, 0);
        assert!(analytics.by_party.is_empty());
    }
}
