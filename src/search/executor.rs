//! Query execution over the in-memory dataset

use super::fuzzy::FuzzyMatcher;
use super::models::MpPage;
use crate::dataset::{Dataset, Mp};
use crate::query::MpQuery;
use std::sync::Arc;
use tracing::debug;

/// Search executor holding a shared, read-only dataset
#[derive(Debug, Clone)]
pub struct Search {
    dataset: Arc<Dataset>,
}

impl Search {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// Filter, search and paginate. Results keep dataset order.
    pub fn execute(&self, query: &MpQuery) -> MpPage {
        let filter = MpFilter::from_query(query);

        let matched: Vec<&Mp> = self
            .dataset
            .records()
            .iter()
            .filter(|mp| filter.matches(mp))
            .collect();

        let total = matched.len();
        let results: Vec<Mp> = matched
            .into_iter()
            .skip(query.offset())
            .take(query.limit)
            .cloned()
            .collect();

        debug!(
            "Query {:?} matched {} records, returning {}",
            query,
            total,
            results.len()
        );

        MpPage::new(query.page, query.limit, total, results)
    }

    /// Look up a single record by id
    pub fn find(&self, id: u32) -> Option<&Mp> {
        self.dataset.get(id)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

/// A query's filters, lowercased once up front
struct MpFilter {
    party: Option<String>,
    constituency: Option<String>,
    search: Option<String>,
    fuzzy: Option<FuzzyMatcher>,
}

impl MpFilter {
    fn from_query(query: &MpQuery) -> Self {
        Self {
            party: query.party.as_deref().map(str::to_lowercase),
            constituency: query.constituency.as_deref().map(str::to_lowercase),
            search: query.search.as_deref().map(str::to_lowercase),
            fuzzy: query.fuzzy.as_deref().map(FuzzyMatcher::new),
        }
    }

    fn matches(&self, mp: &Mp) -> bool {
        // Exact filters first, they are the cheapest
        if let Some(ref party) = self.party {
            if mp.party.trim().to_lowercase() != *party {
                return false;
            }
        }
        if let Some(ref constituency) = self.constituency {
            if mp.constituency.trim().to_lowercase() != *constituency {
                return false;
            }
        }

        if let Some(ref needle) = self.search {
            if !mp.name.to_lowercase().contains(needle.as_str())
                && !mp.constituency.to_lowercase().contains(needle.as_str())
            {
                return false;
            }
        }

        if let Some(ref matcher) = self.fuzzy {
            if !matcher.is_match(&mp.name) && !matcher.is_match(&mp.constituency) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn fixture() -> Search {
        let records = vec![
            Mp::new(1, "John Doe", "Kampala Central", "NUP"),
            Mp::new(2, "Cassiano Okello", "Arua Central", "FDC"),
            Mp::new(3, "Grace Mukasa", "Mukono Municipality", "NRM"),
            Mp::new(4, "Peter Ssemwogerere", "Kawempe North", "NUP"),
            Mp::new(5, "Agnes Nalubega", "Kampala Central", "NRM"),
            Mp::new(6, "Moses Wandera", "Bugiri Municipality", "IND"),
            Mp::new(7, "Esther Atim", "Lira City East", "NRM"),
        ];
        Search::new(Arc::new(Dataset::from_records(records)))
    }

    fn ids(page: &MpPage) -> Vec<u32> {
        page.results.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_defaults_return_everything_in_order() {
        let page = fixture().execute(&MpQuery::default());
        assert_eq!(page.total, 7);
        assert_eq!(page.total_pages, 1);
        assert_eq!(ids(&page), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_pages_partition_the_filtered_set() {
        let search = fixture();
        for limit in 1..=8 {
            let first = search.execute(&MpQuery::default().with_limit(limit));
            let mut seen = Vec::new();
            for page in 1..=first.total_pages {
                let result = search.execute(&MpQuery::default().with_limit(limit).with_page(page));
                assert!(result.results.len() <= limit);
                assert_eq!(result.total, first.total);
                seen.extend(ids(&result));
            }
            assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7], "limit {limit}");
            assert_eq!(seen.iter().collect::<HashSet<_>>().len(), seen.len());
        }

        // Same with a filter narrowing the set
        for limit in 1..=4 {
            let filtered = MpQuery::default().with_party("NRM").with_limit(limit);
            let first = search.execute(&filtered);
            assert_eq!(first.total, 3);
            let mut seen = Vec::new();
            for page in 1..=first.total_pages {
                let result = search.execute(&filtered.clone().with_page(page));
                assert!(result.results.len() <= limit);
                assert_eq!(result.total, 3);
                seen.extend(ids(&result));
            }
            assert_eq!(seen, vec![3, 5, 7], "party NRM, limit {limit}");
        }
    }

    #[test]
    fn test_party_filter_case_insensitive() {
        let page = fixture().execute(&MpQuery::default().with_party("nrm"));
        assert_eq!(ids(&page), vec![3, 5, 7]);
        assert!(page.results.iter().all(|m| m.party.eq_ignore_ascii_case("NRM")));
    }

    #[test]
    fn test_constituency_filter_is_exact() {
        let search = fixture();
        let page = search.execute(&MpQuery::default().with_constituency("kampala central"));
        assert_eq!(ids(&page), vec![1, 5]);

        let partial = search.execute(&MpQuery::default().with_constituency("Kampala"));
        assert_eq!(partial.total, 0);
    }

    #[test]
    fn test_exact_filters_are_conjunctive() {
        let page = fixture().execute(
            &MpQuery::default()
                .with_party("NUP")
                .with_constituency("Kampala Central"),
        );
        assert_eq!(ids(&page), vec![1]);
    }

    #[test]
    fn test_search_matches_name_or_constituency() {
        let search = fixture();
        let page = search.execute(&MpQuery::default().with_search("kampala"));
        assert_eq!(ids(&page), vec![1, 5]);

        let by_name = search.execute(&MpQuery::default().with_search("OKELLO"));
        assert_eq!(ids(&by_name), vec![2]);
    }

    #[test]
    fn test_fuzzy_matches_near_spelling() {
        let page = fixture().execute(&MpQuery::default().with_fuzzy("Kassiano"));
        assert_eq!(ids(&page), vec![2]);
    }

    #[test]
    fn test_search_and_fuzzy_both_apply() {
        let search = fixture();
        let both = search.execute(&MpQuery::default().with_search("central").with_fuzzy("Kassiano"));
        assert_eq!(ids(&both), vec![2]);

        let none = search.execute(&MpQuery::default().with_search("kampala").with_fuzzy("Kassiano"));
        assert_eq!(none.total, 0);
    }

    #[test]
    fn test_unknown_filter_yields_empty_page() {
        let page = fixture().execute(&MpQuery::default().with_party("XYZ"));
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_page_beyond_range_is_empty_with_totals() {
        let page = fixture().execute(&MpQuery::default().with_limit(3).with_page(10));
        assert!(page.results.is_empty());
        assert_eq!(page.total, 7);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 10);
    }

    #[test]
    fn test_find() {
        let search = fixture();
        assert_eq!(search.find(1).map(|m| m.name.as_str()), Some("John Doe"));
        assert!(search.find(999999).is_none());
    }
}
