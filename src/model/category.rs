// src/model/category.rs

/// Soft fill colors for the periodic grid, keyed by category label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryStyle {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
    Other,
}

/// Legend entries in display order.
pub const LEGEND: [(&str, CategoryStyle); 10] = [
    ("Alkali Metal", CategoryStyle::AlkaliMetal),
    ("Alkaline Earth Metal", CategoryStyle::AlkalineEarthMetal),
    ("Transition Metal", CategoryStyle::TransitionMetal),
    ("Post-transition Metal", CategoryStyle::PostTransitionMetal),
    ("Metalloid", CategoryStyle::Metalloid),
    ("Nonmetal", CategoryStyle::Nonmetal),
    ("Halogen", CategoryStyle::Halogen),
    ("Noble Gas", CategoryStyle::NobleGas),
    ("Lanthanide", CategoryStyle::Lanthanide),
    ("Actinide", CategoryStyle::Actinide),
];

impl CategoryStyle {
    pub fn for_category(category: &str) -> Self {
        match category.to_lowercase().as_str() {
            "alkali metal" => CategoryStyle::AlkaliMetal,
            "alkaline earth metal" => CategoryStyle::AlkalineEarthMetal,
            "transition metal" => CategoryStyle::TransitionMetal,
            "post-transition metal" => CategoryStyle::PostTransitionMetal,
            "metalloid" => CategoryStyle::Metalloid,
            "polyatomic nonmetal" | "diatomic nonmetal" | "nonmetal" => CategoryStyle::Nonmetal,
            "halogen" => CategoryStyle::Halogen,
            "noble gas" => CategoryStyle::NobleGas,
            "lanthanide" => CategoryStyle::Lanthanide,
            "actinide" => CategoryStyle::Actinide,
            _ => CategoryStyle::Other,
        }
    }

    /// Fill color as a `#RRGGBB` string.
    pub fn hex(&self) -> &'static str {
        match self {
            CategoryStyle::AlkaliMetal => "#FCA5A5",
            CategoryStyle::AlkalineEarthMetal => "#FDBA74",
            CategoryStyle::TransitionMetal => "#FDE047",
            CategoryStyle::PostTransitionMetal => "#86EFAC",
            CategoryStyle::Metalloid => "#5EEAD4",
            CategoryStyle::Nonmetal => "#93C5FD",
            CategoryStyle::Halogen => "#A5B4FC",
            CategoryStyle::NobleGas => "#D8B4FE",
            CategoryStyle::Lanthanide => "#F9A8D4",
            CategoryStyle::Actinide => "#FDA4AF",
            CategoryStyle::Other => "#D1D5DB",
        }
    }
}
