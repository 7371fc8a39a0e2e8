// src/spectrum/color.rs

/// Swatch color for wavelengths outside the visible range.
pub const OUT_OF_RANGE_GRAY: (u8, u8, u8) = (0xCC, 0xCC, 0xCC);

const SWATCH_INTENSITY: f64 = 0.8;

/// Approximate display color of a visible wavelength (nm), built from
/// piecewise-linear channel ramps. Used for the small swatch next to each
/// listed line, independent of the canvas gradient.
pub fn wavelength_to_rgb(wavelength: f64) -> (u8, u8, u8) {
    if !(380.0..=750.0).contains(&wavelength) {
        return OUT_OF_RANGE_GRAY;
    }

    let w = wavelength;
    let (r, g, b) = if w < 440.0 {
        (-(w - 440.0) / (440.0 - 380.0), 0.0, 1.0)
    } else if w < 490.0 {
        (0.0, (w - 440.0) / (490.0 - 440.0), 1.0)
    } else if w < 510.0 {
        (0.0, 1.0, -(w - 510.0) / (510.0 - 490.0))
    } else if w < 580.0 {
        ((w - 510.0) / (580.0 - 510.0), 1.0, 0.0)
    } else if w < 645.0 {
        (1.0, -(w - 645.0) / (645.0 - 580.0), 0.0)
    } else {
        (1.0, 0.0, 0.0)
    };

    (channel(r), channel(g), channel(b))
}

fn channel(v: f64) -> u8 {
    (SWATCH_INTENSITY * 255.0 * v.clamp(0.0, 1.0)).floor() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_is_gray() {
        assert_eq!(wavelength_to_rgb(379.9), OUT_OF_RANGE_GRAY);
        assert_eq!(wavelength_to_rgb(750.1), OUT_OF_RANGE_GRAY);
        assert_eq!(wavelength_to_rgb(f64::NAN), OUT_OF_RANGE_GRAY);
    }

    #[test]
    fn test_band_edges() {
        // 0.8 * 255 = 204
        assert_eq!(wavelength_to_rgb(380.0), (204, 0, 204));
        assert_eq!(wavelength_to_rgb(440.0), (0, 0, 204));
        assert_eq!(wavelength_to_rgb(510.0), (0, 204, 0));
        assert_eq!(wavelength_to_rgb(580.0), (204, 204, 0));
        assert_eq!(wavelength_to_rgb(645.0), (204, 0, 0));
        assert_eq!(wavelength_to_rgb(750.0), (204, 0, 0));
    }

    #[test]
    fn test_ramp_midpoint() {
        // halfway through 440-490: green ramps to 0.5
        let (r, g, b) = wavelength_to_rgb(465.0);
        assert_eq!(r, 0);
        assert_eq!(g, 102);
        assert_eq!(b, 204);
    }
}
