pub mod export;
pub mod primitives;
pub mod spectrum;
pub mod table;

use thiserror::Error;

// Re-export specific functions to keep the API clean for the rest of the app
pub use export::{export_spectrum, ExportFormat};
pub use spectrum::{line_position, render as render_spectrum};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid drawing surface ({width}x{height})")]
    InvalidSurface { width: f64, height: f64 },
    #[error("cairo: {0}")]
    Cairo(#[from] cairo::Error),
    #[error("could not write image: {0}")]
    Write(#[from] cairo::IoError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
