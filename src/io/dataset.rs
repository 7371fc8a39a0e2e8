// src/io/dataset.rs

use crate::model::{map_all, NormalizedElement, RawElementRecord};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use thiserror::Error;

use super::images::{element_image_url, ElementImages};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("could not read dataset: {0}")]
    Io(#[from] io::Error),
    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("atomic number {0} appears more than once")]
    DuplicateAtomicNumber(u32),
    #[error("element {0:?} has atomic number 0")]
    InvalidAtomicNumber(String),
}

#[derive(Debug, Deserialize)]
struct ElementsDocument {
    elements: Vec<RawElementRecord>,
}

/// The loaded, normalized element collection.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Elements in dataset order.
    pub elements: Vec<NormalizedElement>,
    index: HashMap<u32, usize>,
    bohr_images: HashMap<u32, String>,
}

impl Dataset {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dataset = Self::from_reader(BufReader::new(file))?;
        log::info!("Loaded {} elements from {:?}", dataset.len(), path);
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let doc: ElementsDocument = serde_json::from_reader(reader)?;
        Self::from_records(doc.elements)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let doc: ElementsDocument = serde_json::from_str(json)?;
        Self::from_records(doc.elements)
    }

    /// Maps the records and checks the identity invariant: every atomic number
    /// is positive and unique.
    pub fn from_records(records: Vec<RawElementRecord>) -> Result<Self, DatasetError> {
        let mut index = HashMap::with_capacity(records.len());
        let mut bohr_images = HashMap::new();

        for (i, raw) in records.iter().enumerate() {
            if raw.number == 0 {
                return Err(DatasetError::InvalidAtomicNumber(raw.name.clone()));
            }
            if index.insert(raw.number, i).is_some() {
                return Err(DatasetError::DuplicateAtomicNumber(raw.number));
            }
            if let Some(url) = raw.bohr_model_image.as_ref().filter(|u| !u.is_empty()) {
                bohr_images.insert(raw.number, url.clone());
            }
        }

        Ok(Self {
            elements: map_all(&records),
            index,
            bohr_images,
        })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn by_number(&self, atomic_number: u32) -> Option<&NormalizedElement> {
        self.index.get(&atomic_number).map(|&i| &self.elements[i])
    }

    /// Image URLs for the detail window. `None` for unknown elements.
    pub fn images(&self, atomic_number: u32) -> Option<ElementImages> {
        let element = self.by_number(atomic_number)?;
        Some(ElementImages {
            bohr: self.bohr_images.get(&atomic_number).cloned(),
            element: Some(element_image_url(&element.name)),
        })
    }
}
