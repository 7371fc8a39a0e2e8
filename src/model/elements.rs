// src/model/elements.rs

use serde::{Deserialize, Serialize};

/// Fallback CPK color for records without a `cpk-hex` entry.
pub const DEFAULT_CPK_COLOR: &str = "#CCCCCC";

/// One element as it appears in the dataset's `elements` array.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawElementRecord {
    pub name: String,
    pub symbol: String,
    pub number: u32,
    pub atomic_mass: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub xpos: u32,
    #[serde(default)]
    pub ypos: u32,
    #[serde(default)]
    pub block: Option<String>,
    #[serde(rename = "cpk-hex", default)]
    pub cpk_hex: Option<String>,
    #[serde(default)]
    pub electron_configuration: String,
    #[serde(default)]
    pub electronegativity_pauling: Option<f64>,
    #[serde(default)]
    pub atomic_radius: Option<f64>,
    #[serde(default)]
    pub ionization_energies: Option<Vec<f64>>,
    #[serde(default)]
    pub electron_affinity: Option<f64>,
    #[serde(default)]
    pub oxidation_states: Option<String>,
    #[serde(default)]
    pub phase: Option<String>,
    #[serde(default)]
    pub melt: Option<f64>,
    #[serde(default)]
    pub boil: Option<f64>,
    #[serde(default)]
    pub density: Option<f64>,
    #[serde(default)]
    pub discovered_by: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub bohr_model_image: Option<String>,
}

/// Display-friendly element, the shape every view works with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedElement {
    pub name: String,
    pub symbol: String,
    pub atomic_number: u32,
    pub atomic_mass: f64,
    pub category: String,
    pub group: u32,
    pub period: u32,
    pub block: String,
    pub cpk_color: String,
    pub electron_configuration: String,
    pub electronegativity: Option<f64>,
    pub atomic_radius: Option<f64>,
    pub ionization_energy: Option<f64>,
    pub electron_affinity: Option<f64>,
    pub oxidation_states: Vec<String>,
    pub standard_state: Option<String>,
    pub melting_point: Option<f64>,
    pub boiling_point: Option<f64>,
    pub density: Option<f64>,
    pub discovered_by: Option<String>,
    pub year_discovered: Option<i32>,
    pub description: Option<String>,
}

/// Maps a raw record into its normalized form. Never fails; every optional
/// field has a fallback.
pub fn map(raw: &RawElementRecord) -> NormalizedElement {
    NormalizedElement {
        name: raw.name.clone(),
        symbol: raw.symbol.clone(),
        atomic_number: raw.number,
        atomic_mass: raw.atomic_mass,
        category: raw.category.clone(),
        group: raw.xpos,
        period: raw.ypos,
        block: raw.block.clone().unwrap_or_default(),
        cpk_color: cpk_color(raw.cpk_hex.as_deref()),
        electron_configuration: raw.electron_configuration.clone(),
        electronegativity: raw.electronegativity_pauling,
        atomic_radius: non_zero(raw.atomic_radius),
        ionization_energy: non_zero(
            raw
                .ionization_energies
                .as_ref()
                .and_then(|list| list.first().copied()),
        ),
        electron_affinity: non_zero(raw.electron_affinity),
        oxidation_states: split_oxidation_states(raw.oxidation_states.as_deref()),
        standard_state: raw.phase.clone(),
        melting_point: raw.melt,
        boiling_point: raw.boil,
        density: raw.density,
        discovered_by: raw.discovered_by.clone(),
        year_discovered: raw.year.as_deref().and_then(parse_leading_int),
        description: raw.summary.clone(),
    }
}

/// Maps a whole collection, keeping input order.
pub fn map_all(raws: &[RawElementRecord]) -> Vec<NormalizedElement> {
    raws.iter().map(map).collect()
}

fn cpk_color(hex: Option<&str>) -> String {
    match hex {
        Some(h) if !h.is_empty() => format!("#{}", h),
        _ => DEFAULT_CPK_COLOR.to_string(),
    }
}

// Zero radius/energy/affinity is treated the same as a missing value.
fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

fn split_oxidation_states(src: Option<&str>) -> Vec<String> {
    match src {
        Some(s) if !s.is_empty() => s.split(',').map(|p| p.trim().to_string()).collect(),
        _ => Vec::new(),
    }
}

/// Parses the leading decimal integer of `s`, the way a lenient year field is
/// read ("1766", " 1898 ", "1940s"). Returns `None` when no digit leads.
pub fn parse_leading_int(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let value: i32 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}
