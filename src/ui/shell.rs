// src/ui/shell.rs

use super::list_view::ElementList;
use crate::panels::{FilterPanel, SearchBar};
use elemview::config::StartView;
use elemview::state::AppState;
use gtk4::prelude::*;
use gtk4::{ApplicationWindow, DrawingArea, Stack};
use std::cell::RefCell;
use std::rc::Rc;

pub const LIST_PAGE: &str = "list";
pub const TABLE_PAGE: &str = "table";

/// Handles to every widget that mirrors `AppState`, shared by the actions
/// and panels.
#[derive(Clone)]
pub struct Shell {
    pub window: ApplicationWindow,
    pub state: Rc<RefCell<AppState>>,
    pub stack: Stack,
    pub search: Rc<SearchBar>,
    pub filters: Rc<FilterPanel>,
    pub list: Rc<ElementList>,
    pub table_area: DrawingArea,
}

impl Shell {
    /// Re-derives the list view after a query, filter or sort change.
    pub fn refresh_list(&self) {
        let (visible, total, filters) = {
            let st = self.state.borrow();
            (st.visible_elements(), st.dataset.len(), st.filters.clone())
        };
        self.list.populate(&visible, total);
        self.filters.sync_header(&filters);
        self.table_area.queue_draw();
    }

    /// Full resync after the dataset or the inputs were replaced wholesale.
    pub fn refresh_all(&self) {
        let query = self.state.borrow().query.clone();
        self.search.sync(&query);
        self.filters.rebuild(self);
        self.refresh_list();
    }

    pub fn show_view(&self, view: StartView) {
        self.state.borrow_mut().view = view;
        let page = match view {
            StartView::List => LIST_PAGE,
            StartView::Table => TABLE_PAGE,
        };
        if self.stack.visible_child_name().as_deref() != Some(page) {
            self.stack.set_visible_child_name(page);
        }
    }
}
