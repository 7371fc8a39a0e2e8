// src/query/filter.rs

use crate::model::NormalizedElement;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Per-dimension restriction sets. An empty set places no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub category: BTreeSet<String>,
    #[serde(default)]
    pub group: BTreeSet<u32>,
    #[serde(default)]
    pub period: BTreeSet<u32>,
    #[serde(default)]
    pub block: BTreeSet<String>,
    #[serde(default)]
    pub standard_state: BTreeSet<String>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `element` satisfies every non-empty dimension.
    pub fn accepts(&self, element: &NormalizedElement) -> bool {
        if !self.category.is_empty() && !self.category.contains(&element.category) {
            return false;
        }
        if !self.group.is_empty() && !self.group.contains(&element.group) {
            return false;
        }
        if !self.period.is_empty() && !self.period.contains(&element.period) {
            return false;
        }
        if !self.block.is_empty() && !self.block.contains(&element.block) {
            return false;
        }
        if !self.standard_state.is_empty() {
            // An element without a known phase never passes a phase restriction
            match &element.standard_state {
                Some(state) if self.standard_state.contains(state) => {}
                _ => return false,
            }
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of selected values across all dimensions.
    pub fn active_count(&self) -> usize {
        self.category.len()
            + self.group.len()
            + self.period.len()
            + self.block.len()
            + self.standard_state.len()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_category(&mut self, value: &str) {
        toggle(&mut self.category, value.to_string());
    }

    pub fn toggle_group(&mut self, value: u32) {
        toggle(&mut self.group, value);
    }

    pub fn toggle_period(&mut self, value: u32) {
        toggle(&mut self.period, value);
    }

    pub fn toggle_block(&mut self, value: &str) {
        toggle(&mut self.block, value.to_string());
    }

    pub fn toggle_standard_state(&mut self, value: &str) {
        toggle(&mut self.standard_state, value.to_string());
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

/// Case-insensitive match against name, symbol, or decimal atomic number.
pub fn matches_query(element: &NormalizedElement, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    element.name.to_lowercase().contains(&q)
        || element.symbol.to_lowercase().contains(&q)
        || element.atomic_number.to_string().contains(&q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::tests::sample;

    #[test]
    fn test_empty_spec_accepts_everything() {
        let spec = FilterSpec::new();
        assert!(sample().iter().all(|e| spec.accepts(e)));
        assert!(spec.is_empty());
    }

    #[test]
    fn test_non_empty_dimensions_restrict() {
        let mut spec = FilterSpec::new();
        spec.toggle_period(2);
        spec.toggle_block("p");
        for e in sample().iter().filter(|e| spec.accepts(e)) {
            assert_eq!(e.period, 2);
            assert_eq!(e.block, "p");
        }
        assert!(sample().iter().any(|e| spec.accepts(e)));
    }

    #[test]
    fn test_null_state_never_matches_state_filter() {
        let mut spec = FilterSpec::new();
        spec.toggle_standard_state("Solid");
        spec.toggle_standard_state("Gas");
        let elements = sample();
        let unknown = elements.iter().find(|e| e.standard_state.is_none()).unwrap();
        assert!(!spec.accepts(unknown));
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut spec = FilterSpec::new();
        spec.toggle_category("noble gas");
        assert_eq!(spec.active_count(), 1);
        spec.toggle_group(18);
        assert_eq!(spec.active_count(), 2);
        spec.toggle_category("noble gas");
        assert_eq!(spec.active_count(), 1);
        spec.clear();
        assert!(spec.is_empty());
    }

    #[test]
    fn test_query_matching() {
        let elements = sample();
        let helium = elements.iter().find(|e| e.symbol == "He").unwrap();
        assert!(matches_query(helium, "HEL"));
        assert!(matches_query(helium, "he"));
        assert!(matches_query(helium, "2"));
        assert!(matches_query(helium, ""));
        assert!(!matches_query(helium, "xyz"));
    }
}
