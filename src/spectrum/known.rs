// src/spectrum/known.rs
//
// Measured visible emission lines for a few well-known elements.

use super::SpectralLine;

const fn line(wavelength: f64, intensity: f64, color: &'static str) -> SpectralLine {
    SpectralLine {
        wavelength,
        intensity,
        color,
    }
}

// Balmer series
const HYDROGEN: [SpectralLine; 4] = [
    line(656.3, 1.0, "red"),
    line(486.1, 0.8, "blue-green"),
    line(434.0, 0.6, "blue"),
    line(410.2, 0.4, "violet"),
];

const HELIUM: [SpectralLine; 4] = [
    line(667.8, 0.7, "red"),
    line(587.6, 1.0, "yellow"),
    line(501.6, 0.5, "green"),
    line(447.1, 0.8, "blue"),
];

const NEON: [SpectralLine; 6] = [
    line(640.2, 0.9, "red-orange"),
    line(633.4, 1.0, "red"),
    line(616.4, 0.7, "orange"),
    line(603.0, 0.4, "orange"),
    line(585.2, 0.8, "yellow"),
    line(540.1, 0.5, "green"),
];

const MERCURY: [SpectralLine; 5] = [
    line(579.0, 0.8, "yellow"),
    line(577.0, 0.7, "yellow"),
    line(546.1, 1.0, "green"),
    line(435.8, 0.9, "blue"),
    line(404.7, 0.7, "violet"),
];

// D lines (589.0 and 589.6) drawn as one
const SODIUM: [SpectralLine; 3] = [
    line(589.0, 1.0, "yellow"),
    line(568.8, 0.3, "yellow-green"),
    line(616.1, 0.2, "orange"),
];

/// Symbol -> lines, in table order.
pub static KNOWN_SPECTRA: [(&str, &[SpectralLine]); 5] = [
    ("H", &HYDROGEN),
    ("He", &HELIUM),
    ("Ne", &NEON),
    ("Hg", &MERCURY),
    ("Na", &SODIUM),
];

/// Exact (case-sensitive) symbol lookup.
pub fn lookup(symbol: &str) -> Option<&'static [SpectralLine]> {
    KNOWN_SPECTRA
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, lines)| *lines)
}
