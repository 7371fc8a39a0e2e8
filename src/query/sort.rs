// src/query/sort.rs

use super::QueryError;
use crate::model::NormalizedElement;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Sortable scalar fields of [`NormalizedElement`]. Serialized as the
/// camelCase key and parsed back through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortField {
    Name,
    Symbol,
    AtomicNumber,
    AtomicMass,
    Category,
    Group,
    Period,
    Block,
    CpkColor,
    ElectronConfiguration,
    Electronegativity,
    AtomicRadius,
    IonizationEnergy,
    ElectronAffinity,
    StandardState,
    MeltingPoint,
    BoilingPoint,
    Density,
    DiscoveredBy,
    YearDiscovered,
    Description,
}

/// Sort buttons offered by the filter panel, in display order.
pub const SORT_CHOICES: [SortField; 5] = [
    SortField::AtomicNumber,
    SortField::Name,
    SortField::AtomicMass,
    SortField::Electronegativity,
    SortField::YearDiscovered,
];

pub(crate) enum SortKey<'a> {
    Text(Option<&'a str>),
    Number(Option<f64>),
}

impl SortField {
    pub const ALL: [SortField; 21] = [
        SortField::Name,
        SortField::Symbol,
        SortField::AtomicNumber,
        SortField::AtomicMass,
        SortField::Category,
        SortField::Group,
        SortField::Period,
        SortField::Block,
        SortField::CpkColor,
        SortField::ElectronConfiguration,
        SortField::Electronegativity,
        SortField::AtomicRadius,
        SortField::IonizationEnergy,
        SortField::ElectronAffinity,
        SortField::StandardState,
        SortField::MeltingPoint,
        SortField::BoilingPoint,
        SortField::Density,
        SortField::DiscoveredBy,
        SortField::YearDiscovered,
        SortField::Description,
    ];

    /// Field name as used by the dataset's display shape (camelCase).
    pub fn key(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Symbol => "symbol",
            SortField::AtomicNumber => "atomicNumber",
            SortField::AtomicMass => "atomicMass",
            SortField::Category => "category",
            SortField::Group => "group",
            SortField::Period => "period",
            SortField::Block => "block",
            SortField::CpkColor => "cpkColor",
            SortField::ElectronConfiguration => "electronConfiguration",
            SortField::Electronegativity => "electronegativity",
            SortField::AtomicRadius => "atomicRadius",
            SortField::IonizationEnergy => "ionizationEnergy",
            SortField::ElectronAffinity => "electronAffinity",
            SortField::StandardState => "standardState",
            SortField::MeltingPoint => "meltingPoint",
            SortField::BoilingPoint => "boilingPoint",
            SortField::Density => "density",
            SortField::DiscoveredBy => "discoveredBy",
            SortField::YearDiscovered => "yearDiscovered",
            SortField::Description => "description",
        }
    }

    /// Button label: "atomicNumber" -> "Atomic Number".
    pub fn label(&self) -> String {
        let mut out = String::new();
        for (i, c) in self.key().chars().enumerate() {
            if i == 0 {
                out.extend(c.to_uppercase());
            } else if c.is_ascii_uppercase() {
                out.push(' ');
                out.push(c);
            } else {
                out.push(c);
            }
        }
        out
    }

    pub(crate) fn extract<'a>(&self, e: &'a NormalizedElement) -> SortKey<'a> {
        use SortKey::{Number, Text};
        match self {
            SortField::Name => Text(Some(&e.name)),
            SortField::Symbol => Text(Some(&e.symbol)),
            SortField::AtomicNumber => Number(Some(e.atomic_number as f64)),
            SortField::AtomicMass => Number(Some(e.atomic_mass)),
            SortField::Category => Text(Some(&e.category)),
            SortField::Group => Number(Some(e.group as f64)),
            SortField::Period => Number(Some(e.period as f64)),
            SortField::Block => Text(Some(&e.block)),
            SortField::CpkColor => Text(Some(&e.cpk_color)),
            SortField::ElectronConfiguration => Text(Some(&e.electron_configuration)),
            SortField::Electronegativity => Number(e.electronegativity),
            SortField::AtomicRadius => Number(e.atomic_radius),
            SortField::IonizationEnergy => Number(e.ionization_energy),
            SortField::ElectronAffinity => Number(e.electron_affinity),
            SortField::StandardState => Text(e.standard_state.as_deref()),
            SortField::MeltingPoint => Number(e.melting_point),
            SortField::BoilingPoint => Number(e.boiling_point),
            SortField::Density => Number(e.density),
            SortField::DiscoveredBy => Text(e.discovered_by.as_deref()),
            SortField::YearDiscovered => Number(e.year_discovered.map(f64::from)),
            SortField::Description => Text(e.description.as_deref()),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortField {
    type Err = QueryError;

    /// Accepts the camelCase key or its snake_case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| *c != '_').collect::<String>().to_lowercase();
        SortField::ALL
            .iter()
            .find(|f| f.key().to_lowercase() == wanted)
            .copied()
            .ok_or_else(|| QueryError::UnknownSortField(s.to_string()))
    }
}

impl TryFrom<String> for SortField {
    type Error = QueryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SortField> for String {
    fn from(field: SortField) -> Self {
        field.key().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::AtomicNumber,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Same field flips the direction; a different field starts ascending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Ascending;
        }
    }

    /// Total order used by the stable sort. Missing values go last regardless
    /// of direction.
    pub fn compare(&self, a: &NormalizedElement, b: &NormalizedElement) -> Ordering {
        let ordering = match (self.field.extract(a), self.field.extract(b)) {
            (SortKey::Text(x), SortKey::Text(y)) => match (x, y) {
                (Some(x), Some(y)) => collate(x, y),
                (x, y) => return nulls_last(x.is_none(), y.is_none()),
            },
            (SortKey::Number(x), SortKey::Number(y)) => match (x, y) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (x, y) => return nulls_last(x.is_none(), y.is_none()),
            },
            // A field always extracts the same key kind
            _ => Ordering::Equal,
        };

        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

fn nulls_last(a_missing: bool, b_missing: bool) -> Ordering {
    match (a_missing, b_missing) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => Ordering::Equal,
    }
}

/// Dictionary-style string order: case-insensitive first, then the raw
/// strings break ties so that "a" sorts before "A" deterministically.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_names() {
        assert_eq!("atomicNumber".parse::<SortField>().unwrap(), SortField::AtomicNumber);
        assert_eq!("atomic_mass".parse::<SortField>().unwrap(), SortField::AtomicMass);
        assert_eq!("Name".parse::<SortField>().unwrap(), SortField::Name);
    }

    #[test]
    fn test_unknown_field_fails_fast() {
        let err = "oxidationStates".parse::<SortField>().unwrap_err();
        assert!(matches!(err, QueryError::UnknownSortField(ref f) if f == "oxidationStates"));
        assert!("colour".parse::<SortField>().is_err());
    }

    #[test]
    fn test_settings_use_field_keys() {
        let spec = SortSpec {
            field: SortField::YearDiscovered,
            direction: SortDirection::Descending,
        };
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(json, r#"{"field":"yearDiscovered","direction":"Descending"}"#);
        let back: SortSpec =
            serde_json::from_str(r#"{"field":"year_discovered","direction":"Descending"}"#)
                .unwrap();
        assert_eq!(back, spec);

        let unsortable = r#"{"field":"oxidationStates","direction":"Ascending"}"#;
        let err = serde_json::from_str::<SortSpec>(unsortable).unwrap_err();
        assert!(err.to_string().contains("unknown sort field"), "{}", err);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SortField::AtomicNumber.label(), "Atomic Number");
        assert_eq!(SortField::Name.label(), "Name");
        assert_eq!(SortField::YearDiscovered.label(), "Year Discovered");
    }

    #[test]
    fn test_toggle_direction() {
        let mut spec = SortSpec::default();
        spec.toggle(SortField::AtomicNumber);
        assert_eq!(spec.direction, SortDirection::Descending);
        spec.toggle(SortField::Name);
        assert_eq!(spec, SortSpec::new(SortField::Name, SortDirection::Ascending));
    }

    #[test]
    fn test_collation() {
        assert_eq!(collate("argon", "Boron"), Ordering::Less);
        assert_eq!(collate("Boron", "argon"), Ordering::Greater);
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("Neon", "Neon"), Ordering::Equal);
    }
}
