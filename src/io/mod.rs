// src/io/mod.rs
pub mod dataset;
pub mod images;

pub use dataset::{Dataset, DatasetError};
pub use images::{element_image_url, ElementImages, RequestFence, Ticket};

use std::path::{Path, PathBuf};

/// Default dataset location relative to the working directory.
pub const DEFAULT_DATASET: &str = "assets/elementData.json";

/// Candidate dataset paths, in lookup order: explicit setting, the bundled
/// asset next to the working directory, then the system install location.
pub fn dataset_candidates(configured: Option<&Path>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Some(p) = configured {
        out.push(p.to_path_buf());
    }
    out.push(PathBuf::from(DEFAULT_DATASET));
    out.push(PathBuf::from("/usr/share/elemview/elementData.json"));
    out
}

/// Loads the first candidate that exists and reports which one it was.
/// Errors from an existing but broken file are returned rather than skipped.
pub fn load_dataset(configured: Option<&Path>) -> Result<(Dataset, PathBuf), DatasetError> {
    let candidates = dataset_candidates(configured);
    for path in &candidates {
        if path.exists() {
            return Dataset::load(path).map(|ds| (ds, path.clone()));
        }
    }
    log::warn!("No dataset found (tried {:?})", candidates);
    Err(DatasetError::Io(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "elementData.json not found",
    )))
}
