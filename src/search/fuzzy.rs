//! Approximate string matching for the `fuzzy` filter
//!
//! Similarity is a partial ratio over Levenshtein distance. Both strings are
//! trimmed and lowercased, then the shorter one is compared against every
//! window of the same length in the longer one. Each window scores
//! `1 - distance / length`, and the best window is the similarity.
//!
//! A field matches when its similarity is at least [`DEFAULT_THRESHOLD`].
//! With it, `kassiano` matches `Cassiano Okello` (one substitution over eight
//! characters, 0.875) while `mukasa` stays well below the cutoff.

/// Minimum partial ratio for a fuzzy match
pub const DEFAULT_THRESHOLD: f64 = 0.75;

/// Matcher for a single fuzzy needle, reused across records
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    needle: Vec<char>,
}

impl FuzzyMatcher {
    pub fn new(needle: &str) -> Self {
        Self {
            needle: normalize(needle),
        }
    }

    /// Similarity between the needle and `haystack`
    pub fn score(&self, haystack: &str) -> f64 {
        partial_ratio_chars(&self.needle, &normalize(haystack))
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.score(haystack) >= DEFAULT_THRESHOLD
    }
}

fn partial_ratio_chars(a: &[char], b: &[char]) -> f64 {
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if shorter.is_empty() {
        return if longer.is_empty() { 1.0 } else { 0.0 };
    }

    let len = shorter.len() as f64;
    let mut best = 0.0_f64;
    for window in longer.windows(shorter.len()) {
        let score = 1.0 - levenshtein(shorter, window) as f64 / len;
        if score > best {
            best = score;
            if best >= 1.0 {
                break;
            }
        }
    }
    best
}

/// Edit distance with unit cost insert, delete and substitute
fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

fn normalize(value: &str) -> Vec<char> {
    value.trim().to_lowercase().chars().collect()
}
