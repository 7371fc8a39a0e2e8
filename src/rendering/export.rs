// src/rendering/export.rs

use super::{spectrum, RenderError};
use crate::spectrum::SpectralLine;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Png,
    Pdf,
}

impl ExportFormat {
    /// Picks the format from the file extension, defaulting to PNG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => ExportFormat::Pdf,
            _ => ExportFormat::Png,
        }
    }
}

/// Writes the spectrum chart to `path`.
pub fn export_spectrum(
    path: &Path,
    lines: &[SpectralLine],
    width: i32,
    height: i32,
    format: ExportFormat,
) -> Result<(), RenderError> {
    if width <= 0 || height <= 0 {
        return Err(RenderError::InvalidSurface {
            width: width as f64,
            height: height as f64,
        });
    }

    match format {
        ExportFormat::Pdf => {
            let surface = cairo::PdfSurface::new(width as f64, height as f64, path)?;
            let cr = cairo::Context::new(&surface)?;
            spectrum::render(&cr, lines, width as f64, height as f64)?;
            drop(cr);
            surface.finish();
        }
        ExportFormat::Png => {
            let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
            {
                let cr = cairo::Context::new(&surface)?;
                spectrum::render(&cr, lines, width as f64, height as f64)?;
            }
            let mut file = std::fs::File::create(path)?;
            surface.write_to_png(&mut file)?;
        }
    }

    log::info!("Exported spectrum ({:?}) to {:?}", format, path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::resolve;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("a.PDF")), ExportFormat::Pdf);
        assert_eq!(ExportFormat::from_path(Path::new("a.png")), ExportFormat::Png);
        assert_eq!(ExportFormat::from_path(Path::new("noext")), ExportFormat::Png);
    }

    #[test]
    fn test_png_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("neon.png");
        export_spectrum(&path, &resolve("Ne", 10), 300, 60, ExportFormat::Png).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_pdf_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("iron.pdf");
        export_spectrum(&path, &resolve("Fe", 26), 600, 120, ExportFormat::Pdf).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_rejects_empty_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.png");
        assert!(export_spectrum(&path, &[], 0, 10, ExportFormat::Png).is_err());
        assert!(!path.exists());
    }
}
