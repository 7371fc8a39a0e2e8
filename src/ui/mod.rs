pub mod detail_window;
pub mod list_view;
pub mod logger;
pub mod preferences;
pub mod shell;
pub mod table_view;

// Re-exports
pub use preferences::show_preferences_window;
pub use shell::Shell;
