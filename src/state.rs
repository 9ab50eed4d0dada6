use std::path::PathBuf;
use std::sync::Arc;

use crate::color::SeriesColors;
use crate::config::SourceConfig;
use crate::data::cache::DatasetCache;
use crate::data::error::DataLoadError;
use crate::data::filter::{Dimension, FilterSelection};
use crate::data::model::{Measure, SalesDataset};
use crate::view::DashboardView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    DataView,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Where the current dataset came from.
    pub source: SourceConfig,

    cache: DatasetCache,

    /// Loaded dataset (None until the first successful load).
    pub dataset: Option<Arc<SalesDataset>>,

    /// Current filter selections.
    pub selection: FilterSelection,

    /// Measure shown in the last-12 vs previous-12 comparison.
    pub comparison_measure: Measure,

    /// Everything derived from `dataset` + `selection` (cached until the next change).
    pub view: DashboardView,

    pub colors: SeriesColors,

    pub tab: Tab,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(source: SourceConfig) -> Self {
        Self {
            source,
            cache: DatasetCache::default(),
            dataset: None,
            selection: FilterSelection::default(),
            comparison_measure: Measure::CaseEquivalents,
            view: DashboardView::default(),
            colors: SeriesColors::default(),
            tab: Tab::default(),
            status_message: None,
        }
    }

    /// Load `self.source` through the cache.
    ///
    /// If the cache hands back the dataset already on screen the current
    /// selection is kept; otherwise filters reset to "everything".
    pub fn load(&mut self) -> Result<(), DataLoadError> {
        let dataset = self.cache.get(&self.source)?;
        let unchanged = self
            .dataset
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, &dataset));
        if !unchanged {
            self.set_dataset(dataset);
        }
        self.status_message = None;
        Ok(())
    }

    /// Switch to another file. On failure the previous dataset stays.
    pub fn open(&mut self, path: PathBuf) {
        let next = self.source.with_path(path);
        let previous = std::mem::replace(&mut self.source, next);
        if let Err(e) = self.load() {
            log::error!("Failed to load {}: {e}", self.source.path.display());
            self.status_message = Some(format!("Error: {e}"));
            self.source = previous;
        }
    }

    /// Drop the cache and read the current source again.
    pub fn reload(&mut self) {
        self.cache.invalidate();
        if let Err(e) = self.load() {
            log::error!("Failed to reload {}: {e}", self.source.path.display());
            self.status_message = Some(format!("Error: {e}"));
        }
    }

    /// Ingest a newly loaded dataset and select everything in it.
    pub fn set_dataset(&mut self, dataset: Arc<SalesDataset>) {
        self.selection = FilterSelection::select_all(&dataset);
        self.dataset = Some(dataset);
        self.recompute();
    }

    /// Re-run the pipeline after any input change.
    pub fn recompute(&mut self) {
        if let Some(ds) = &self.dataset {
            self.view = DashboardView::build(ds, &self.selection, self.comparison_measure);
        }
    }

    /// Toggle a single value in a dimension's filter.
    pub fn toggle_filter_value(&mut self, dim: Dimension, value: &str) {
        self.selection.toggle(dim, value);
        self.recompute();
    }

    /// Select all values of a dimension.
    pub fn select_all(&mut self, dim: Dimension) {
        if let Some(ds) = &self.dataset {
            self.selection.select_all_in(dim, ds);
            self.recompute();
        }
    }

    /// Deselect all values of a dimension.
    pub fn select_none(&mut self, dim: Dimension) {
        self.selection.select_none_in(dim);
        self.recompute();
    }

    pub fn set_year_range(&mut self, from: i32, to: i32) {
        if self.selection.years != (from, to) {
            self.selection.set_years(from, to);
            self.recompute();
        }
    }

    pub fn set_comparison_measure(&mut self, measure: Measure) {
        if self.comparison_measure != measure {
            self.comparison_measure = measure;
            self.recompute();
        }
    }
}
