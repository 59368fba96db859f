use std::collections::HashSet;

use crate::models::Firm;

/// Distinct industry tags across the catalog, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    pub fn build(firms: &[Firm]) -> Self {
        let mut seen = HashSet::new();
        let terms = firms
            .iter()
            .flat_map(|f| f.verticals.iter())
            .filter(|v| seen.insert(v.as_str()))
            .cloned()
            .collect();
        Self { terms }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn suggest(&self, query: &str) -> Vec<String> {
        suggest(query, &self.terms)
    }
}

/// Case-insensitive autosuggest: every term starting with `query`, then every other term
/// containing it. Both groups keep vocabulary order. An empty query suggests nothing.
pub fn suggest(query: &str, vocabulary: &[String]) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut prefixed = Vec::new();
    let mut contained = Vec::new();
    let mut seen = HashSet::new();
    for term in vocabulary {
        if !seen.insert(term.as_str()) {
            continue;
        }
        let lowered = term.to_lowercase();
        if lowered.starts_with(&needle) {
            prefixed.push(term.clone());
        } else if lowered.contains(&needle) {
            contained.push(term.clone());
        }
    }

    prefixed.extend(contained);
    prefixed
}
