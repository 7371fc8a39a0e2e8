// src/state.rs

use crate::config::{Config, StartView};
use crate::io::{Dataset, ElementImages, RequestFence, Ticket};
use crate::model::NormalizedElement;
use crate::query::{self, Facets, FilterSpec, SortField, SortSpec};
use crate::spectrum::{self, SpectralLine};

/// Which tab of the detail window is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
    Images,
    Spectrum,
}

pub struct AppState {
    pub config: Config,
    pub dataset: Dataset,
    pub dataset_source: String,

    // List view inputs
    pub query: String,
    pub filters: FilterSpec,
    pub sort: SortSpec,

    pub view: StartView,
    pub selected: Option<u32>,
    pub detail_tab: DetailTab,
    pub image_fence: RequestFence,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            sort: config.default_sort,
            view: config.start_view,
            detail_tab: if config.open_spectrum_first {
                DetailTab::Spectrum
            } else {
                DetailTab::Images
            },
            config,
            dataset: Dataset::default(),
            dataset_source: String::new(),
            query: String::new(),
            filters: FilterSpec::new(),
            selected: None,
            image_fence: RequestFence::new(),
        }
    }

    /// Reads the settings file; returns the status message for the console.
    pub fn load_config(&mut self) -> String {
        let (config, msg) = Config::load();
        *self = Self::with_config(config);
        msg
    }

    pub fn save_config(&self) {
        let msg = self.config.save();
        log::info!("{}", msg);
    }

    /// Swaps in a new dataset and resets anything that referred to the old one.
    pub fn set_dataset(&mut self, dataset: Dataset, source: &str) {
        self.dataset = dataset;
        self.dataset_source = source.to_string();
        self.filters.clear();
        self.close_detail();
    }

    /// The list view's current contents.
    pub fn visible_elements(&self) -> Vec<NormalizedElement> {
        query::view(&self.dataset.elements, &self.query, &self.filters, &self.sort)
    }

    pub fn facets(&self) -> Facets {
        Facets::from_elements(&self.dataset.elements)
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort.toggle(field);
    }

    /// Clears search text and filters; sort order is kept.
    pub fn reset_filters(&mut self) {
        self.query.clear();
        self.filters.clear();
    }

    pub fn selected_element(&self) -> Option<&NormalizedElement> {
        self.selected.and_then(|n| self.dataset.by_number(n))
    }

    /// Opens the detail window for `atomic_number` and issues the ticket its
    /// image request must present when it completes.
    pub fn select(&mut self, atomic_number: u32) -> Option<Ticket> {
        self.dataset.by_number(atomic_number)?;
        self.selected = Some(atomic_number);
        self.detail_tab = if self.config.open_spectrum_first {
            DetailTab::Spectrum
        } else {
            DetailTab::Images
        };
        Some(self.image_fence.begin(atomic_number))
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
        self.image_fence.cancel();
    }

    /// True when a finished image request still belongs to the open element.
    pub fn accepts_images(&self, ticket: &Ticket) -> bool {
        self.image_fence.is_current(ticket) && self.selected == Some(ticket.atomic_number)
    }

    pub fn selected_images(&self) -> Option<ElementImages> {
        self.selected.and_then(|n| self.dataset.images(n))
    }

    /// Spectral lines for the open element; recomputed on every call.
    pub fn selected_spectrum(&self) -> Option<Vec<SpectralLine>> {
        self
            .selected_element()
            .map(|e| spectrum::resolve(&e.symbol, e.atomic_number))
    }
}
