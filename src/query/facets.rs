// src/query/facets.rs

use crate::model::NormalizedElement;

/// Distinct values offered as checkboxes in the filter panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub categories: Vec<String>,
    pub groups: Vec<u32>,
    pub periods: Vec<u32>,
    pub blocks: Vec<String>,
    pub standard_states: Vec<String>,
}

impl Facets {
    /// Categories, blocks and states keep first-seen order; groups and periods
    /// are sorted and drop the zero placeholder.
    pub fn from_elements(elements: &[NormalizedElement]) -> Self {
        let mut facets = Facets::default();

        for e in elements {
            push_unique(&mut facets.categories, &e.category);
            push_unique(&mut facets.blocks, &e.block);
            if let Some(state) = e.standard_state.as_ref().filter(|s| !s.is_empty()) {
                push_unique(&mut facets.standard_states, state);
            }
            if e.group != 0 && !facets.groups.contains(&e.group) {
                facets.groups.push(e.group);
            }
            if e.period != 0 && !facets.periods.contains(&e.period) {
                facets.periods.push(e.period);
            }
        }

        facets.groups.sort_unstable();
        facets.periods.sort_unstable();
        facets
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::tests::sample;

    #[test]
    fn test_facets_from_sample() {
        let facets = Facets::from_elements(&sample());
        assert_eq!(facets.categories[0], "diatomic nonmetal");
        assert!(facets.categories.contains(&"noble gas".to_string()));
        assert_eq!(facets.periods, vec![1, 2]);
        assert!(facets.groups.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(facets.blocks, vec!["s".to_string(), "p".to_string()]);
        assert_eq!(facets.standard_states, vec!["Gas".to_string(), "Solid".to_string()]);
    }
}
