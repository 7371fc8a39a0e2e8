//src/model/mod.rs
pub mod category;
pub mod elements;
pub mod layout;

// Re-exports for cleaner imports
pub use category::CategoryStyle;
pub use elements::{map, map_all, NormalizedElement, RawElementRecord};
pub use layout::GridCell;
