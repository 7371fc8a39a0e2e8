// src/spectrum/mod.rs
//
// Emission lines for the detail window: measured lines where we have them,
// a deterministic trig-based approximation for everything else.

pub mod color;
pub mod known;

pub use color::wavelength_to_rgb;

use serde::Serialize;

/// Visible range covered by the spectrum chart (nm).
pub const MIN_WAVELENGTH: f64 = 380.0;
pub const MAX_WAVELENGTH: f64 = 750.0;

const BASE_WAVELENGTHS: [f64; 5] = [656.3, 589.0, 486.1, 434.0, 410.2];
const MIN_SIMULATED_LINES: u32 = 3;
const MAX_SIMULATED_LINES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpectralLine {
    /// Nanometers.
    pub wavelength: f64,
    /// Relative intensity, 0..1.
    pub intensity: f64,
    pub color: &'static str,
}

impl SpectralLine {
    /// "656.3 nm (red)"
    pub fn label(&self) -> String {
        format!("{:.1} nm ({})", self.wavelength, self.color)
    }
}

/// True when `symbol` has measured lines in the built-in table.
pub fn has_known_spectrum(symbol: &str) -> bool {
    known::lookup(symbol).is_some()
}

/// Lines to display for an element. Never empty.
pub fn resolve(symbol: &str, atomic_number: u32) -> Vec<SpectralLine> {
    match known::lookup(symbol) {
        Some(lines) => lines.to_vec(),
        None => simulate(atomic_number),
    }
}

/// Deterministic stand-in spectrum: the same atomic number always yields the
/// same lines.
pub fn simulate(atomic_number: u32) -> Vec<SpectralLine> {
    let count = (atomic_number / 20).clamp(MIN_SIMULATED_LINES, MAX_SIMULATED_LINES);

    (0..count)
        .map(|i| {
            let seed = (atomic_number as f64) * ((i + 1) as f64);
            let modifier = seed.sin() * 30.0 + 5.0;
            let wavelength = (BASE_WAVELENGTHS[i as usize % BASE_WAVELENGTHS.len()] + modifier)
                .clamp(MIN_WAVELENGTH, MAX_WAVELENGTH);

            SpectralLine {
                wavelength,
                // Not clamped; the formula already stays within [0, 1]
                intensity: 0.5 + (seed * 0.1).sin() * 0.5,
                color: color_name(wavelength),
            }
        })
        .collect()
}

/// Coarse color bucket used for simulated lines.
pub fn color_name(wavelength: f64) -> &'static str {
    if wavelength < 450.0 {
        "violet"
    } else if wavelength < 490.0 {
        "blue"
    } else if wavelength < 520.0 {
        "green"
    } else if wavelength < 580.0 {
        "yellow"
    } else if wavelength < 620.0 {
        "orange"
    } else {
        "red"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hydrogen_uses_table() {
        let lines = resolve("H", 1);
        let wl: Vec<f64> = lines.iter().map(|l| l.wavelength).collect();
        assert_eq!(wl, vec![656.3, 486.1, 434.0, 410.2]);
        assert_eq!(lines[0].intensity, 1.0);
        assert_eq!(lines[1].color, "blue-green");
        assert!(has_known_spectrum("H"));
    }

    #[test]
    fn test_table_lookup_is_exact() {
        // "h" is not a symbol in the table; falls through to the generator
        assert!(!has_known_spectrum("h"));
        assert_eq!(resolve("h", 1).len(), 3);
        assert_eq!(resolve("Ne", 10).len(), 6);
        assert_eq!(resolve("Na", 11)[1].color, "yellow-green");
    }

    #[test]
    fn test_simulated_line_zero_matches_formula() {
        let lines = resolve("Xx", 40);
        assert_eq!(lines.len(), 3);

        let modifier = (40.0f64).sin() * 30.0 + 5.0;
        let expected = (656.3 + modifier).clamp(380.0, 750.0);
        assert_eq!(lines[0].wavelength, expected);
        assert_eq!(lines[0].intensity, 0.5 + (40.0f64 * 0.1).sin() * 0.5);

        let seed1 = 80.0f64;
        assert_eq!(lines[1].wavelength, (589.0 + seed1.sin() * 30.0 + 5.0).clamp(380.0, 750.0));
    }

    #[test]
    fn test_line_count_clamped() {
        assert_eq!(simulate(1).len(), 3);
        assert_eq!(simulate(59).len(), 3);
        assert_eq!(simulate(60).len(), 3);
        assert_eq!(simulate(80).len(), 4);
        assert_eq!(simulate(100).len(), 5);
        assert_eq!(simulate(118).len(), 5);
    }

    #[test]
    fn test_simulation_is_deterministic() {
        assert_eq!(simulate(26), simulate(26));
        assert_ne!(simulate(26), simulate(27));
    }

    #[test]
    fn test_simulated_lines_stay_in_range() {
        for z in 1..=118 {
            for line in simulate(z) {
                assert!(line.wavelength >= MIN_WAVELENGTH && line.wavelength <= MAX_WAVELENGTH);
                assert!(line.intensity >= 0.0 && line.intensity <= 1.0);
                assert_eq!(line.color, color_name(line.wavelength));
            }
        }
    }

    #[test]
    fn test_color_buckets() {
        assert_eq!(color_name(449.9), "violet");
        assert_eq!(color_name(450.0), "blue");
        assert_eq!(color_name(500.0), "green");
        assert_eq!(color_name(579.0), "yellow");
        assert_eq!(color_name(600.0), "orange");
        assert_eq!(color_name(620.0), "red");
    }

    #[test]
    fn test_label() {
        assert_eq!(resolve("H", 1)[0].label(), "656.3 nm (red)");
    }
}
