// src/rendering/spectrum.rs
//
// Emission spectrum chart: black canvas, a rainbow band for 380-750 nm, a
// labelled wavelength scale, and one white stroke per spectral line.
// Vertical layout is proportional to a 120 px reference height.

use super::primitives::{draw_centered_text, hex_or_gray};
use super::RenderError;
use crate::spectrum::{SpectralLine, MAX_WAVELENGTH, MIN_WAVELENGTH};
use cairo::{Context, LinearGradient};

pub const DEFAULT_WIDTH: i32 = 600;
pub const DEFAULT_HEIGHT: i32 = 120;

const REFERENCE_HEIGHT: f64 = 120.0;
const TICK_COUNT: usize = 8;
const FALLBACK_INTENSITY: f64 = 0.7;

/// Gradient stops: (offset, color).
pub const GRADIENT_STOPS: [(f64, &str); 8] = [
    (0.0, "#6A00F4"),
    (0.15, "#3E00FF"),
    (0.3, "#0028FF"),
    (0.45, "#00DDFF"),
    (0.6, "#00FF28"),
    (0.75, "#FFD500"),
    (0.9, "#FF0000"),
    (1.0, "#960000"),
];

/// Vertical bands in device units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bands {
    pub gradient_top: f64,
    pub gradient_height: f64,
    pub scale_top: f64,
    pub scale_height: f64,
    pub label_baseline: f64,
}

impl Bands {
    pub fn for_height(height: f64) -> Self {
        let k = height / REFERENCE_HEIGHT;
        Self {
            gradient_top: 40.0 * k,
            gradient_height: 40.0 * k,
            scale_top: 90.0 * k,
            scale_height: 20.0 * k,
            label_baseline: 108.0 * k,
        }
    }
}

/// Horizontal position of `wavelength` on a chart `width` wide, or `None`
/// when it falls outside the drawable range.
pub fn line_position(wavelength: f64, width: f64) -> Option<f64> {
    let x = (wavelength - MIN_WAVELENGTH) / (MAX_WAVELENGTH - MIN_WAVELENGTH) * width;
    if (0.0..=width).contains(&x) {
        Some(x)
    } else {
        None
    }
}

/// Wavelength printed under tick `i`.
pub fn tick_wavelength(i: usize) -> f64 {
    MIN_WAVELENGTH + i as f64 * ((MAX_WAVELENGTH - MIN_WAVELENGTH) / (TICK_COUNT - 1) as f64)
}

/// Stroke opacity for `line`; zero or NaN intensity draws at 0.7.
pub fn stroke_intensity(line: &SpectralLine) -> f64 {
    if line.intensity == 0.0 || line.intensity.is_nan() {
        FALLBACK_INTENSITY
    } else {
        line.intensity
    }
}

/// Paints the chart onto `cr`. The context must be usable and the size
/// positive; anything else is reported instead of silently skipped.
pub fn render(
    cr: &Context,
    lines: &[SpectralLine],
    width: f64,
    height: f64,
) -> Result<(), RenderError> {
    if !(width > 0.0 && height > 0.0) {
        return Err(RenderError::InvalidSurface { width, height });
    }
    cr.status()?;

    let bands = Bands::for_height(height);

    // 1. Background
    cr.save()?;
    cr.set_operator(cairo::Operator::Source);
    cr.set_source_rgba(0.0, 0.0, 0.0, 1.0);
    cr.paint()?;
    cr.restore()?;

    // 2. Visible-range gradient band
    let gradient = LinearGradient::new(0.0, 0.0, width, 0.0);
    for (offset, hex) in GRADIENT_STOPS {
        let (r, g, b) = hex_or_gray(hex);
        gradient.add_color_stop_rgb(offset, r, g, b);
    }
    cr.set_source(&gradient)?;
    cr.rectangle(0.0, bands.gradient_top, width, bands.gradient_height);
    cr.fill()?;

    // 3. Wavelength scale
    cr.set_source_rgb(0.2, 0.2, 0.2);
    cr.rectangle(0.0, bands.scale_top, width, bands.scale_height);
    cr.fill()?;

    let font_size = 10.0 * height / REFERENCE_HEIGHT;
    for i in 0..TICK_COUNT {
        let x = i as f64 * (width / (TICK_COUNT - 1) as f64);
        cr.set_source_rgb(0.667, 0.667, 0.667);
        cr.rectangle(x, bands.scale_top, 1.0, 5.0 * height / REFERENCE_HEIGHT);
        cr.fill()?;
        let label = format!("{}nm", tick_wavelength(i).round() as i64);
        draw_centered_text(cr, &label, x, bands.label_baseline, font_size, false)?;
    }

    // 4. Lines
    let mut drawn = 0;
    for line in lines {
        let Some(x) = line_position(line.wavelength, width) else {
            continue;
        };
        let intensity = stroke_intensity(line);

        cr.new_path();
        cr.move_to(x, 0.0);
        cr.line_to(x, bands.scale_top);
        cr.set_source_rgba(1.0, 1.0, 1.0, intensity);
        cr.set_line_width(2.0 + intensity * 3.0);
        cr.stroke()?;
        drawn += 1;
    }

    log::debug!("Spectrum: drew {}/{} lines at {}x{}", drawn, lines.len(), width, height);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::resolve;
    use cairo::{Format, ImageSurface};

    fn pixel(surface: &mut ImageSurface, x: usize, y: usize) -> (u8, u8, u8, u8) {
        surface.flush();
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let i = y * stride + x * 4;
        // ARgb32 is native-endian; little-endian byte order is B, G, R, A
        (data[i + 2], data[i + 1], data[i], data[i + 3])
    }

    #[test]
    fn test_position_endpoints() {
        assert_eq!(line_position(380.0, 600.0), Some(0.0));
        assert_eq!(line_position(750.0, 600.0), Some(600.0));
        assert_eq!(line_position(565.0, 740.0), Some(370.0));
        assert_eq!(line_position(379.0, 600.0), None);
        assert_eq!(line_position(751.0, 600.0), None);
    }

    #[test]
    fn test_ticks() {
        assert_eq!(tick_wavelength(0), 380.0);
        assert!((tick_wavelength(7) - 750.0).abs() < 1e-9);
        assert_eq!(tick_wavelength(1).round(), 433.0);
    }

    #[test]
    fn test_bands_scale_with_height() {
        let b = Bands::for_height(120.0);
        assert_eq!(b.gradient_top, 40.0);
        assert_eq!(b.scale_top, 90.0);
        let b2 = Bands::for_height(240.0);
        assert_eq!(b2.scale_top, 180.0);
    }

    #[test]
    fn test_invalid_surface_fails_fast() {
        let surface = ImageSurface::create(Format::ARgb32, 10, 10).unwrap();
        let cr = Context::new(&surface).unwrap();
        let err = render(&cr, &[], 0.0, 120.0).unwrap_err();
        assert!(matches!(err, RenderError::InvalidSurface { .. }));
        assert!(render(&cr, &[], 600.0, f64::NAN).is_err());
    }

    #[test]
    fn test_paints_background_and_lines() {
        let mut surface = ImageSurface::create(Format::ARgb32, 600, 120).unwrap();
        {
            let cr = Context::new(&surface).unwrap();
            render(&cr, &resolve("H", 1), 600.0, 120.0).unwrap();
        }

        // Top strip away from any line stays black
        assert_eq!(pixel(&mut surface, 20, 10), (0, 0, 0, 255));

        // H-alpha at 656.3 nm, full intensity, 5 px wide
        let x = line_position(656.3, 600.0).unwrap().round() as usize;
        let (r, g, b, _) = pixel(&mut surface, x, 10);
        assert!(r > 200 && g > 200 && b > 200, "got {:?}", (r, g, b));

        // Gradient band left edge is violet
        let (r, g, b, _) = pixel(&mut surface, 1, 60);
        assert!(b > 200 && g < 40 && r > 60, "got {:?}", (r, g, b));
    }

    #[test]
    fn test_missing_intensity_uses_fallback() {
        let line = |intensity| SpectralLine {
            wavelength: 565.0,
            intensity,
            color: "yellow",
        };
        assert_eq!(stroke_intensity(&line(0.0)), 0.7);
        assert_eq!(stroke_intensity(&line(f64::NAN)), 0.7);
        assert_eq!(stroke_intensity(&line(0.4)), 0.4);
        assert_eq!(stroke_intensity(&line(1.0)), 1.0);
    }

    #[test]
    fn test_zero_intensity_line_is_drawn_translucent() {
        let mut surface = ImageSurface::create(Format::ARgb32, 740, 120).unwrap();
        let faint = [SpectralLine {
            wavelength: 565.0,
            intensity: 0.0,
            color: "yellow",
        }];
        {
            let cr = Context::new(&surface).unwrap();
            render(&cr, &faint, 740.0, 120.0).unwrap();
        }

        // x = 370, stroke 2 + 0.7 * 3 = 4.1 px wide; white at 0.7 over black
        let (r, g, b, a) = pixel(&mut surface, 370, 10);
        assert_eq!(a, 255);
        assert!((170..=186).contains(&r), "got {:?}", (r, g, b));
        assert!(r == g && g == b, "got {:?}", (r, g, b));

        // 4.1 px stroke covers x = 368..=371 fully, nothing at 373
        assert!(pixel(&mut surface, 368, 10).0 > 150);
        assert_eq!(pixel(&mut surface, 373, 10), (0, 0, 0, 255));
    }

    #[test]
    fn test_out_of_range_lines_are_skipped() {
        let mut surface = ImageSurface::create(Format::ARgb32, 200, 120).unwrap();
        let stray = [SpectralLine {
            wavelength: 900.0,
            intensity: 1.0,
            color: "red",
        }];
        {
            let cr = Context::new(&surface).unwrap();
            render(&cr, &stray, 200.0, 120.0).unwrap();
        }
        for x in (0..200).step_by(7) {
            assert_eq!(pixel(&mut surface, x, 10), (0, 0, 0, 255));
        }
    }
}
