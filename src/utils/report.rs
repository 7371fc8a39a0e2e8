// src/utils/report.rs

use crate::model::NormalizedElement;
use crate::spectrum::{self, SpectralLine};
use std::collections::HashMap;

const UNKNOWN: &str = "Unknown";
pub const NO_DESCRIPTION: &str = "No description available.";

/// A titled block of (label, value) rows in the detail window.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub rows: Vec<(&'static str, String)>,
}

fn or_unknown(v: Option<String>) -> String {
    v.unwrap_or_else(|| UNKNOWN.to_string())
}

// Zero counts as missing for measured quantities.
fn measured(v: Option<f64>, unit: &str) -> String {
    match v {
        Some(x) if x != 0.0 && !x.is_nan() => format!("{} {}", x, unit),
        _ => UNKNOWN.to_string(),
    }
}

/// "H · Hydrogen"
pub fn title(e: &NormalizedElement) -> String {
    format!("{} · {}", e.symbol, e.name)
}

/// "Atomic Number: 1 | Atomic Mass: 1.0080"
pub fn subtitle(e: &NormalizedElement) -> String {
    format!(
        "Atomic Number: {} | Atomic Mass: {:.4}",
        e.atomic_number, e.atomic_mass
    )
}

/// Property rows shown in the detail window.
pub fn detail_sections(e: &NormalizedElement) -> Vec<Section> {
    let basic = Section {
        title: "Basic Information",
        rows: vec![
            ("Category", e.category.clone()),
            ("Group", e.group.to_string()),
            ("Period", e.period.to_string()),
            ("Block", e.block.clone()),
            ("Standard State", or_unknown(e.standard_state.clone())),
            ("Discovered By", or_unknown(e.discovered_by.clone())),
            ("Year Discovered", or_unknown(e.year_discovered.map(|y| y.to_string()))),
        ],
    };

    let physical = Section {
        title: "Physical Properties",
        rows: vec![
            ("Density", measured(e.density, "g/cm³")),
            ("Melting Point", measured(e.melting_point, "K")),
            ("Boiling Point", measured(e.boiling_point, "K")),
        ],
    };

    let oxidation = if e.oxidation_states.is_empty() {
        UNKNOWN.to_string()
    } else {
        e.oxidation_states.join(", ")
    };

    let electronic = Section {
        title: "Electronic Properties",
        rows: vec![
            ("Electron Configuration", e.electron_configuration.clone()),
            ("Electronegativity", or_unknown(e.electronegativity.map(|v| v.to_string()))),
            ("Atomic Radius", measured(e.atomic_radius, "pm")),
            ("Ionization Energy", measured(e.ionization_energy, "eV")),
            ("Electron Affinity", measured(e.electron_affinity, "eV")),
            ("Oxidation States", oxidation),
        ],
    };

    vec![basic, physical, electronic]
}

pub fn description(e: &NormalizedElement) -> &str {
    e.description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(NO_DESCRIPTION)
}

/// Plain-text element report for the console.
pub fn text_report(e: &NormalizedElement) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n{}\n", title(e), subtitle(e)));
    for section in detail_sections(e) {
        out.push_str("--------------------------------------------------\n");
        out.push_str(&format!("{}\n", section.title));
        for (label, value) in &section.rows {
            out.push_str(&format!("  {:<24} {}\n", format!("{}:", label), value));
        }
    }
    out.push_str("--------------------------------------------------\n");
    out.push_str(description(e));
    out.push('\n');
    out
}

/// Spectrum listing: heading plus one line per entry.
pub fn spectrum_report(e: &NormalizedElement, lines: &[SpectralLine]) -> String {
    let known = spectrum::has_known_spectrum(&e.symbol);
    let mut out = String::new();
    out.push_str(if known {
        "Notable spectral lines:\n"
    } else {
        "Simulated spectral lines:\n"
    });
    for line in lines {
        out.push_str(&format!("  {}  intensity {:.2}\n", line.label(), line.intensity));
    }
    if known {
        out.push_str(&format!("Based on known emission spectra for {}.\n", e.name));
    } else {
        out.push_str("Note: This is simulated spectral data for educational purposes only.\n");
    }
    out
}

/// One-paragraph summary printed after a dataset loads.
pub fn dataset_summary(elements: &[NormalizedElement], source: &str) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for e in elements {
        *counts.entry(e.category.as_str()).or_insert(0) += 1;
    }
    let mut parts: Vec<_> = counts.into_iter().collect();
    parts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let mut out = String::new();
    out.push_str(&format!("Dataset: {}\n", source));
    out.push_str(&format!("Elements: {}\n", elements.len()));
    for (category, n) in parts {
        let category = if category.is_empty() { "(uncategorized)" } else { category };
        out.push_str(&format!("  {:<28} {}\n", category, n));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{map, RawElementRecord};

    fn boron() -> NormalizedElement {
        map(&RawElementRecord {
            name: "Boron".into(),
            symbol: "B".into(),
            number: 5,
            atomic_mass: 10.81,
            category: "metalloid".into(),
            xpos: 13,
            ypos: 2,
            block: Some("p".into()),
            density: Some(2.08),
            melt: Some(2349.0),
            boil: Some(0.0),
            oxidation_states: Some("3".into()),
            electronegativity_pauling: Some(2.04),
            ..Default::default()
        })
    }

    fn row<'a>(sections: &'a [Section], label: &str) -> &'a str {
        sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
            .unwrap()
    }

    #[test]
    fn test_sections_and_fallbacks() {
        let s = detail_sections(&boron());
        assert_eq!(s.len(), 3);
        assert_eq!(row(&s, "Density"), "2.08 g/cm³");
        assert_eq!(row(&s, "Melting Point"), "2349 K");
        assert_eq!(row(&s, "Boiling Point"), "Unknown");
        assert_eq!(row(&s, "Standard State"), "Unknown");
        assert_eq!(row(&s, "Year Discovered"), "Unknown");
        assert_eq!(row(&s, "Electronegativity"), "2.04");
        assert_eq!(row(&s, "Oxidation States"), "3");
        assert_eq!(row(&s, "Atomic Radius"), "Unknown");
    }

    #[test]
    fn test_header_lines() {
        let b = boron();
        assert_eq!(title(&b), "B · Boron");
        assert_eq!(subtitle(&b), "Atomic Number: 5 | Atomic Mass: 10.8100");
        assert_eq!(description(&b), NO_DESCRIPTION);
    }

    #[test]
    fn test_text_report_contains_rows() {
        let report = text_report(&boron());
        assert!(report.contains("Basic Information"));
        assert!(report.contains("Density:"));
        assert!(report.contains("No description available."));
    }

    #[test]
    fn test_spectrum_report_marks_simulated() {
        let b = boron();
        let lines = spectrum::resolve(&b.symbol, b.atomic_number);
        let report = spectrum_report(&b, &lines);
        assert!(report.starts_with("Simulated spectral lines:"));
        assert_eq!(report.matches(" nm (").count(), 3);
    }

    #[test]
    fn test_dataset_summary_counts() {
        let elements = crate::query::tests::sample();
        let summary = dataset_summary(&elements, "sample");
        assert!(summary.contains("Elements: 6"));
        assert!(summary.contains("noble gas"));
    }
}
