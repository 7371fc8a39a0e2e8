// src/config.rs

use crate::query::SortSpec;
use crate::rendering::ExportFormat;
use crate::rendering::spectrum::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartView {
    List,
    Table,
}

// --- Spectrum ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpectrumStyle {
    pub width: i32,
    pub height: i32,
    pub export_format: ExportFormat,
}

impl Default for SpectrumStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            export_format: ExportFormat::Png,
        }
    }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Explicit dataset file; `None` searches the default locations.
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    #[serde(default = "default_start_view")]
    pub start_view: StartView,

    #[serde(default)]
    pub default_sort: SortSpec,

    /// Open the spectrum tab instead of images when the detail window opens.
    #[serde(default)]
    pub open_spectrum_first: bool,

    #[serde(default)]
    pub spectrum: SpectrumStyle,
}

fn default_start_view() -> StartView {
    StartView::List
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: None,
            start_view: StartView::List,
            default_sort: SortSpec::default(),
            open_spectrum_first: false,
            spectrum: SpectrumStyle::default(),
        }
    }
}

impl Config {
    /// Loads config from standard OS location (e.g., ~/.config/elemview/settings.json)
    pub fn load() -> (Self, String) {
        Self::load_from(&Self::get_path())
    }

    /// Never fails: a missing or broken file yields defaults plus a message.
    pub fn load_from(path: &Path) -> (Self, String) {
        if path.exists() {
            match File::open(path) {
                Ok(file) => {
                    let reader = BufReader::new(file);
                    match serde_json::from_reader(reader) {
                        Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
                        Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
                    }
                }
                Err(e) => (Self::default(), format!("Error opening config: {}", e)),
            }
        } else {
            (
                Self::default(),
                "No config found. Using defaults.".to_string(),
            )
        }
    }

    /// Saves config to standard OS location
    pub fn save(&self) -> String {
        self.save_to(&Self::get_path())
    }

    pub fn save_to(&self, path: &Path) -> String {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        match File::create(path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                match serde_json::to_writer_pretty(writer, self) {
                    Ok(_) => format!("Config saved to {:?}", path),
                    Err(e) => format!("Failed to save config: {}", e),
                }
            }
            Err(e) => format!("Could not create config file: {}", e),
        }
    }

    fn get_path() -> PathBuf {
        // Must match the application id in main.rs
        if let Some(proj) = ProjectDirs::from("org", "elemview", "elemview") {
            proj.config_dir().join("settings.json")
        } else {
            PathBuf::from("settings.json")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{SortDirection, SortField};

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut cfg = Config::default();
        cfg.start_view = StartView::Table;
        cfg.default_sort = SortSpec::new(SortField::Electronegativity, SortDirection::Descending);
        cfg.spectrum.width = 800;
        cfg.dataset_path = Some(PathBuf::from("/tmp/elements.json"));

        let msg = cfg.save_to(&path);
        assert!(msg.starts_with("Config saved"), "{}", msg);

        let (loaded, msg) = Config::load_from(&path);
        assert!(msg.starts_with("Config loaded"), "{}", msg);
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (cfg, msg) = Config::load_from(&dir.path().join("absent.json"));
        assert_eq!(cfg, Config::default());
        assert!(msg.contains("Using defaults"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "open_spectrum_first": true }"#).unwrap();
        let (cfg, _) = Config::load_from(&path);
        assert!(cfg.open_spectrum_first);
        assert_eq!(cfg.start_view, StartView::List);
        assert_eq!(cfg.spectrum, SpectrumStyle::default());
    }

    #[test]
    fn test_broken_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        let (cfg, msg) = Config::load_from(&path);
        assert_eq!(cfg, Config::default());
        assert!(msg.starts_with("Error parsing config"));
    }

    #[test]
    fn test_unknown_sort_field_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{ "default_sort": { "field": "oxidationStates", "direction": "Ascending" } }"#,
        )
        .unwrap();
        let (cfg, msg) = Config::load_from(&path);
        assert_eq!(cfg.default_sort, SortSpec::default());
        assert!(msg.starts_with("Error parsing config"), "{}", msg);
        assert!(msg.contains("unknown sort field: \"oxidationStates\""), "{}", msg);
    }

    #[test]
    fn test_sort_field_stored_by_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{ "default_sort": { "field": "atomic_mass", "direction": "Descending" } }"#,
        )
        .unwrap();
        let (cfg, _) = Config::load_from(&path);
        assert_eq!(cfg.default_sort.field, SortField::AtomicMass);

        cfg.save_to(&path);
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains(r#""field": "atomicMass""#), "{}", text);
    }
}
