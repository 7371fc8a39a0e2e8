//! Chemical element catalogue: dataset mapping, search/filter/sort, emission
//! spectra and the cairo painters used by the desktop viewer.

pub mod config;
pub mod io;
pub mod model;
pub mod query;
pub mod rendering;
pub mod spectrum;
pub mod state;
pub mod utils;

pub use model::{NormalizedElement, RawElementRecord};
pub use query::{view, FilterSpec, SortDirection, SortField, SortSpec};
pub use spectrum::{resolve, SpectralLine};
