// src/query/mod.rs
//
// Search, filter and sort over the normalized element list. Stages always run
// in that order and never touch the input slice.

pub mod facets;
pub mod filter;
pub mod sort;

pub use facets::Facets;
pub use filter::{matches_query, FilterSpec};
pub use sort::{SortDirection, SortField, SortSpec, SORT_CHOICES};

use crate::model::NormalizedElement;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown sort field: {0:?}")]
    UnknownSortField(String),
}

/// Derives the visible, ordered list for the current search/filter/sort state.
pub fn view(
    elements: &[NormalizedElement],
    query: &str,
    filter: &FilterSpec,
    sort: &SortSpec,
) -> Vec<NormalizedElement> {
    let mut result: Vec<NormalizedElement> = elements
        .iter()
        .filter(|e| matches_query(e, query))
        .filter(|e| filter.accepts(e))
        .cloned()
        .collect();

    // slice::sort_by is stable, equal keys keep their input order
    result.sort_by(|a, b| sort.compare(a, b));

    log::debug!(
        "view: {} of {} elements (query {:?}, {} filters, sort {} {:?})",
        result.len(),
        elements.len(),
        query,
        filter.active_count(),
        sort.field,
        sort.direction
    );
    result
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::{map_all, RawElementRecord};

    #[allow(clippy::too_many_arguments)]
    fn element(
        number: u32,
        name: &str,
        symbol: &str,
        category: &str,
        group: u32,
        period: u32,
        block: &str,
        state: Option<&str>,
        electronegativity: Option<f64>,
        year: Option<&str>,
    ) -> RawElementRecord {
        RawElementRecord {
            name: name.into(),
            symbol: symbol.into(),
            number,
            atomic_mass: number as f64 * 2.0,
            category: category.into(),
            xpos: group,
            ypos: period,
            block: Some(block.into()),
            electronegativity_pauling: electronegativity,
            phase: state.map(String::from),
            year: year.map(String::from),
            ..Default::default()
        }
    }

    #[rustfmt::skip]
    pub(crate) fn sample() -> Vec<NormalizedElement> {
        map_all(&[
            element(1, "Hydrogen", "H", "diatomic nonmetal", 1, 1, "s", Some("Gas"), Some(2.20), Some("1766")),
            element(2, "Helium", "He", "noble gas", 18, 1, "s", Some("Gas"), None, Some("1868")),
            element(3, "Lithium", "Li", "alkali metal", 1, 2, "s", Some("Solid"), Some(0.98), Some("1817")),
            element(4, "Beryllium", "Be", "alkaline earth metal", 2, 2, "s", Some("Solid"), Some(1.57), Some("1798")),
            element(5, "Boron", "B", "metalloid", 13, 2, "p", None, Some(2.04), Some("1808")),
            element(6, "Carbon", "C", "polyatomic nonmetal", 14, 2, "p", Some("Solid"), Some(2.55), Some("Ancient")),
        ])
    }

    fn symbols(list: &[NormalizedElement]) -> Vec<&str> {
        list.iter().map(|e| e.symbol.as_str()).collect()
    }

    #[test]
    fn test_end_to_end_query_he() {
        let json = r#"{ "elements": [
            { "name": "Hydrogen", "symbol": "H", "number": 1, "atomic_mass": 1.008 },
            { "name": "Helium", "symbol": "He", "number": 2, "atomic_mass": 4.0026 },
            { "name": "Lithium", "symbol": "Li", "number": 3, "atomic_mass": 6.94 },
            { "name": "Beryllium", "symbol": "Be", "number": 4, "atomic_mass": 9.0122 },
            { "name": "Boron", "symbol": "B", "number": 5, "atomic_mass": 10.81 }
        ] }"#;
        let dataset = crate::io::Dataset::from_json_str(json).unwrap();
        let sort = SortSpec::new(SortField::Name, SortDirection::Ascending);
        let result = view(&dataset.elements, "he", &FilterSpec::new(), &sort);
        assert_eq!(symbols(&result), vec!["He"]);
        assert_eq!(result[0].name, "Helium");
    }

    #[test]
    fn test_empty_query_and_filter_returns_all_sorted() {
        let elements = sample();
        let result = view(&elements, "", &FilterSpec::new(), &SortSpec::default());
        assert_eq!(result.len(), elements.len());
        assert_eq!(symbols(&result), vec!["H", "He", "Li", "Be", "B", "C"]);
    }

    #[test]
    fn test_filtered_results_respect_every_dimension() {
        let mut filter = FilterSpec::new();
        filter.toggle_standard_state("Solid");
        filter.toggle_period(2);
        let result = view(&sample(), "", &filter, &SortSpec::default());
        assert_eq!(symbols(&result), vec!["Li", "Be", "C"]);
        for e in &result {
            assert!(filter.standard_state.contains(e.standard_state.as_ref().unwrap()));
            assert!(filter.period.contains(&e.period));
        }
    }

    #[test]
    fn test_view_is_pure() {
        let elements = sample();
        let before = elements.clone();
        let mut filter = FilterSpec::new();
        filter.toggle_block("s");
        let sort = SortSpec::new(SortField::Name, SortDirection::Descending);
        let a = view(&elements, "l", &filter, &sort);
        let b = view(&elements, "l", &filter, &sort);
        assert_eq!(a, b);
        assert_eq!(elements, before);
    }

    #[test]
    fn test_sort_by_name_both_directions() {
        let elements = sample();
        let asc = view(
            &elements,
            "",
            &FilterSpec::new(),
            &SortSpec::new(SortField::Name, SortDirection::Ascending),
        );
        assert_eq!(symbols(&asc), vec!["Be", "B", "C", "He", "H", "Li"]);
        let desc = view(
            &elements,
            "",
            &FilterSpec::new(),
            &SortSpec::new(SortField::Name, SortDirection::Descending),
        );
        assert_eq!(symbols(&desc), vec!["Li", "H", "He", "C", "B", "Be"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let elements = sample();
        let asc = view(
            &elements,
            "",
            &FilterSpec::new(),
            &SortSpec::new(SortField::Period, SortDirection::Ascending),
        );
        assert_eq!(symbols(&asc), vec!["H", "He", "Li", "Be", "B", "C"]);
        let desc = view(
            &elements,
            "",
            &FilterSpec::new(),
            &SortSpec::new(SortField::Period, SortDirection::Descending),
        );
        assert_eq!(symbols(&desc), vec!["Li", "Be", "B", "C", "H", "He"]);
    }

    #[test]
    fn test_nulls_sort_last_in_both_directions() {
        let elements = sample();
        let asc = view(
            &elements,
            "",
            &FilterSpec::new(),
            &SortSpec::new(SortField::Electronegativity, SortDirection::Ascending),
        );
        assert_eq!(symbols(&asc), vec!["Li", "Be", "B", "H", "C", "He"]);

        let desc = view(
            &elements,
            "",
            &FilterSpec::new(),
            &SortSpec::new(SortField::Electronegativity, SortDirection::Descending),
        );
        assert_eq!(symbols(&desc), vec!["C", "H", "B", "Be", "Li", "He"]);

        let by_year = view(
            &elements,
            "",
            &FilterSpec::new(),
            &SortSpec::new(SortField::YearDiscovered, SortDirection::Descending),
        );
        assert_eq!(by_year.last().unwrap().symbol, "C");
    }

    #[test]
    fn test_sort_by_nullable_text_field() {
        let elements = sample();
        let result = view(
            &elements,
            "",
            &FilterSpec::new(),
            &SortSpec::new(SortField::StandardState, SortDirection::Ascending),
        );
        assert_eq!(symbols(&result), vec!["H", "He", "Li", "Be", "C", "B"]);
    }
}
