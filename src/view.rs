use crate::data::aggregate::{monthly_summary, totals, MonthlyAggregate, Totals};
use crate::data::compare::{compare_periods, PeriodComparison};
use crate::data::filter::{filtered_indices, pick, FilterSelection};
use crate::data::model::{Measure, SalesDataset};

// ---------------------------------------------------------------------------
// View model: everything the panels draw, derived from (dataset, selection)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardView {
    /// Indices into `dataset.records` passing the filters.
    pub visible: Vec<usize>,
    pub totals: Totals,
    /// Oldest month first.
    pub monthly: Vec<MonthlyAggregate>,
    /// `None` when the filters leave no rows.
    pub comparison: Option<PeriodComparison>,
}

impl DashboardView {
    /// Run the whole pipeline. Pure; called again on every input change.
    pub fn build(dataset: &SalesDataset, selection: &FilterSelection, measure: Measure) -> Self {
        let visible = filtered_indices(&dataset.records, selection);
        let rows = pick(&dataset.records, &visible);

        let view = Self {
            totals: totals(rows.iter().copied()),
            monthly: monthly_summary(rows.iter().copied()),
            comparison: compare_periods(rows.iter().copied(), measure),
            visible,
        };
        log::debug!(
            "recomputed view: {} of {} rows, {} months",
            view.visible.len(),
            dataset.len(),
            view.monthly.len()
        );
        view
    }
}
