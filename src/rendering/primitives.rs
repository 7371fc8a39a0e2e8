// src/rendering/primitives.rs

use cairo::{Context, FontSlant, FontWeight};
use std::f64::consts::PI;

/// Parses `#RRGGBB` (leading `#` optional) into 0..1 channels.
pub fn hex_to_rgb(hex: &str) -> Option<(f64, f64, f64)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0))
}

/// Like [`hex_to_rgb`] but falls back to mid gray for malformed input.
pub fn hex_or_gray(hex: &str) -> (f64, f64, f64) {
    hex_to_rgb(hex).unwrap_or((0.8, 0.8, 0.8))
}

pub fn set_source_hex(cr: &Context, hex: &str, alpha: f64) {
    let (r, g, b) = hex_or_gray(hex);
    cr.set_source_rgba(r, g, b, alpha);
}

/// Draws `text` horizontally centered on `x` with its baseline at `y`.
pub fn draw_centered_text(
    cr: &Context,
    text: &str,
    x: f64,
    y: f64,
    size: f64,
    bold: bool,
) -> Result<(), cairo::Error> {
    let weight = if bold { FontWeight::Bold } else { FontWeight::Normal };
    cr.select_font_face("sans-serif", FontSlant::Normal, weight);
    cr.set_font_size(size);
    let extents = cr.text_extents(text)?;
    cr.move_to(x - extents.width() / 2.0 - extents.x_bearing(), y);
    cr.show_text(text)
}

/// Adds a rounded rectangle to the current path.
pub fn rounded_rect(cr: &Context, x: f64, y: f64, w: f64, h: f64, radius: f64) {
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    cr.new_sub_path();
    cr.arc(x + w - r, y + r, r, -PI / 2.0, 0.0);
    cr.arc(x + w - r, y + h - r, r, 0.0, PI / 2.0);
    cr.arc(x + r, y + h - r, r, PI / 2.0, PI);
    cr.arc(x + r, y + r, r, PI, 1.5 * PI);
    cr.close_path();
}
