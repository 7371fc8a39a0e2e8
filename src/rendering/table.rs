// src/rendering/table.rs
//
// Periodic table painter and click hit-testing. Both share GridGeometry so a
// click always resolves to the cell that was drawn under it.

use super::primitives::{draw_centered_text, rounded_rect, set_source_hex};
use super::RenderError;
use crate::model::category::{CategoryStyle, LEGEND};
use crate::model::layout::{self, GridCell, COLUMNS, ROWS};
use crate::model::NormalizedElement;
use cairo::{Context, FontSlant, FontWeight};
use std::collections::HashMap;

const LABEL_WIDTH: f64 = 24.0;
const HEADER_HEIGHT: f64 = 20.0;
const LEGEND_HEIGHT: f64 = 40.0;
const GAP: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub origin_x: f64,
    pub origin_y: f64,
    pub cell: f64,
}

impl GridGeometry {
    /// Largest square cells that fit the area, leaving room for the group
    /// header, period labels and the legend.
    pub fn fit(width: f64, height: f64) -> Self {
        let by_width = (width - LABEL_WIDTH) / COLUMNS as f64;
        let by_height = (height - HEADER_HEIGHT - LEGEND_HEIGHT) / ROWS as f64;
        Self {
            origin_x: LABEL_WIDTH,
            origin_y: HEADER_HEIGHT,
            cell: by_width.min(by_height).max(0.0),
        }
    }

    /// Drawn rectangle of a cell, inset by the gap.
    pub fn cell_rect(&self, row: usize, col: usize) -> (f64, f64, f64, f64) {
        let x = self.origin_x + col as f64 * self.cell + GAP / 2.0;
        let y = self.origin_y + row as f64 * self.cell + GAP / 2.0;
        let size = (self.cell - GAP).max(0.0);
        (x, y, size, size)
    }

    pub fn cell_at(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        if self.cell <= 0.0 || x < self.origin_x || y < self.origin_y {
            return None;
        }
        let col = ((x - self.origin_x) / self.cell).floor() as usize;
        let row = ((y - self.origin_y) / self.cell).floor() as usize;
        if row < ROWS && col < COLUMNS {
            Some((row, col))
        } else {
            None
        }
    }

    fn bottom(&self) -> f64 {
        self.origin_y + ROWS as f64 * self.cell
    }
}

/// Atomic number of the cell under `(x, y)`, if that cell holds an element.
pub fn hit_test(x: f64, y: f64, width: f64, height: f64) -> Option<u32> {
    let (row, col) = GridGeometry::fit(width, height).cell_at(x, y)?;
    match layout::layout()[row][col] {
        GridCell::Element(n) => Some(n),
        _ => None,
    }
}

pub fn paint(
    cr: &Context,
    elements: &[NormalizedElement],
    selected: Option<u32>,
    width: f64,
    height: f64,
) -> Result<(), RenderError> {
    if !(width > 0.0 && height > 0.0) {
        return Err(RenderError::InvalidSurface { width, height });
    }
    cr.status()?;

    let geo = GridGeometry::fit(width, height);
    if geo.cell < 8.0 {
        // Too small to be legible; leave the background alone
        return Ok(());
    }

    let by_number: HashMap<u32, &NormalizedElement> =
        elements.iter().map(|e| (e.atomic_number, e)).collect();
    let grid = layout::layout();

    // Group numbers
    cr.set_source_rgb(0.6, 0.6, 0.65);
    for col in 0..COLUMNS {
        let cx = geo.origin_x + (col as f64 + 0.5) * geo.cell;
        draw_centered_text(cr, &(col + 1).to_string(), cx, HEADER_HEIGHT - 6.0, 10.0, false)?;
    }

    for (row, cells) in grid.iter().enumerate() {
        if let Some(label) = layout::row_label(row) {
            cr.set_source_rgb(0.6, 0.6, 0.65);
            let cy = geo.origin_y + (row as f64 + 0.5) * geo.cell + 4.0;
            draw_centered_text(cr, &label, LABEL_WIDTH / 2.0, cy, 10.0, false)?;
        }

        for (col, cell) in cells.iter().enumerate() {
            let (x, y, w, h) = geo.cell_rect(row, col);
            match cell {
                GridCell::Empty => {}
                GridCell::LanthanideMarker | GridCell::ActinideMarker => {
                    cr.set_source_rgb(0.15, 0.39, 0.92);
                    let label = cell.marker_label().unwrap_or_default();
                    draw_centered_text(cr, label, x + w / 2.0, y + h / 2.0 + 4.0, 11.0, false)?;
                }
                GridCell::Element(n) => {
                    if let Some(element) = by_number.get(n) {
                        paint_cell(cr, element, (x, y, w, h), selected == Some(*n))?;
                    }
                }
            }
        }
    }

    paint_legend(cr, &geo, width)?;
    Ok(())
}

fn paint_cell(
    cr: &Context,
    element: &NormalizedElement,
    (x, y, w, h): (f64, f64, f64, f64),
    is_selected: bool,
) -> Result<(), RenderError> {
    let radius = w * 0.12;

    // Soft glow in the element's own color
    rounded_rect(cr, x - 1.0, y - 1.0, w + 2.0, h + 2.0, radius);
    set_source_hex(cr, &element.cpk_color, 0.3);
    cr.fill()?;

    rounded_rect(cr, x, y, w, h, radius);
    set_source_hex(cr, CategoryStyle::for_category(&element.category).hex(), 0.6);
    cr.fill_preserve()?;
    if is_selected {
        cr.set_source_rgb(1.0, 1.0, 1.0);
        cr.set_line_width(2.5);
    } else {
        cr.set_source_rgba(0.376, 0.647, 0.98, 0.3);
        cr.set_line_width(1.0);
    }
    cr.stroke()?;

    cr.set_source_rgb(0.12, 0.23, 0.54);

    // Atomic number, top-left
    cr.select_font_face("sans-serif", FontSlant::Normal, FontWeight::Normal);
    cr.set_font_size((w * 0.17).max(6.0));
    cr.move_to(x + w * 0.08, y + w * 0.2);
    cr.show_text(&element.atomic_number.to_string())?;

    draw_centered_text(cr, &element.symbol, x + w / 2.0, y + h * 0.62, (w * 0.32).max(8.0), true)?;

    let name = truncate(&element.name, 9);
    draw_centered_text(cr, &name, x + w / 2.0, y + h * 0.9, (w * 0.15).max(6.0), false)?;
    Ok(())
}

fn paint_legend(cr: &Context, geo: &GridGeometry, width: f64) -> Result<(), RenderError> {
    let swatch = 10.0;
    let per_row = 5;
    let column_width = (width - geo.origin_x) / per_row as f64;
    let top = geo.bottom() + 8.0;

    cr.select_font_face("sans-serif", FontSlant::Normal, FontWeight::Normal);
    cr.set_font_size(10.0);
    for (i, (label, style)) in LEGEND.iter().enumerate() {
        let x = geo.origin_x + (i % per_row) as f64 * column_width;
        let y = top + (i / per_row) as f64 * 16.0;

        rounded_rect(cr, x, y, swatch, swatch, 2.0);
        set_source_hex(cr, style.hex(), 0.6);
        cr.fill()?;

        cr.set_source_rgb(0.82, 0.84, 0.86);
        cr.move_to(x + swatch + 4.0, y + swatch - 1.0);
        cr.show_text(label)?;
    }
    Ok(())
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max_chars - 1).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairo::{Format, ImageSurface};

    #[test]
    fn test_geometry_fits_area() {
        let geo = GridGeometry::fit(24.0 + 18.0 * 50.0, 20.0 + 40.0 + 10.0 * 60.0);
        assert_eq!(geo.cell, 50.0);
        let tall = GridGeometry::fit(2000.0, 20.0 + 40.0 + 10.0 * 30.0);
        assert_eq!(tall.cell, 30.0);
    }

    #[test]
    fn test_hit_test_matches_cell_centers() {
        let (w, h) = (924.0, 560.0);
        let geo = GridGeometry::fit(w, h);
        let cells = [(1u32, (0usize, 0usize)), (2, (0, 17)), (26, (3, 7)), (57, (8, 3))];
        for (n, (row, col)) in cells {
            let (x, y, cw, ch) = geo.cell_rect(row, col);
            assert_eq!(hit_test(x + cw / 2.0, y + ch / 2.0, w, h), Some(n));
        }
    }

    #[test]
    fn test_hit_test_misses() {
        let (w, h) = (924.0, 560.0);
        let geo = GridGeometry::fit(w, h);
        // Empty cell between H and He
        let (x, y, cw, ch) = geo.cell_rect(0, 5);
        assert_eq!(hit_test(x + cw / 2.0, y + ch / 2.0, w, h), None);
        // Lanthanide marker
        let (x, y, cw, ch) = geo.cell_rect(5, 2);
        assert_eq!(hit_test(x + cw / 2.0, y + ch / 2.0, w, h), None);
        // Header and far outside
        assert_eq!(hit_test(30.0, 5.0, w, h), None);
        assert_eq!(hit_test(5000.0, 5000.0, w, h), None);
    }

    #[test]
    fn test_paint_smoke() {
        let surface = ImageSurface::create(Format::ARgb32, 924, 560).unwrap();
        let cr = Context::new(&surface).unwrap();
        let elements = crate::query::tests::sample();
        paint(&cr, &elements, Some(2), 924.0, 560.0).unwrap();
        assert!(paint(&cr, &elements, None, -1.0, 560.0).is_err());
    }

    #[test]
    fn test_paint_survives_malformed_cpk_colors() {
        let surface = ImageSurface::create(Format::ARgb32, 924, 560).unwrap();
        let cr = Context::new(&surface).unwrap();
        let mut elements = crate::query::tests::sample();
        elements[0].cpk_color = "#aé123".to_string();
        elements[1].cpk_color = "#+f+f+f".to_string();
        paint(&cr, &elements, None, 924.0, 560.0).unwrap();
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Neon", 9), "Neon");
        assert_eq!(truncate("Rutherfordium", 9), "Rutherfo…");
    }
}
