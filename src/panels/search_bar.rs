// src/panels/search_bar.rs

use crate::ui::Shell;
use gtk4::prelude::*;
use gtk4::SearchEntry;

pub struct SearchBar {
    pub entry: SearchEntry,
}

impl SearchBar {
    pub fn new() -> Self {
        let entry = SearchEntry::new();
        entry.set_placeholder_text(Some("Search by name, symbol, or atomic number..."));
        entry.set_hexpand(true);
        Self { entry }
    }

    /// Every edit re-runs the query against the whole dataset.
    pub fn connect(&self, shell: &Shell) {
        let shell = shell.clone();
        self.entry.connect_search_changed(move |entry| {
            let text = entry.text().to_string();
            {
                let mut st = shell.state.borrow_mut();
                if st.query == text {
                    return;
                }
                st.query = text;
            }
            shell.refresh_list();
        });
    }

    /// Pushes the state's query back into the entry (after a reset).
    pub fn sync(&self, query: &str) {
        if self.entry.text().as_str() != query {
            self.entry.set_text(query);
        }
    }
}
