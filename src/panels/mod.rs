pub mod filter_panel;
pub mod search_bar;

pub use filter_panel::FilterPanel;
pub use search_bar::SearchBar;
