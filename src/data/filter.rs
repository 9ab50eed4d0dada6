use std::collections::BTreeSet;
use std::fmt;

use super::model::{Record, SalesDataset};

// ---------------------------------------------------------------------------
// Dimension – a categorical column the user can filter on
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Item,
    Distributor,
    State,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Item, Dimension::Distributor, Dimension::State];

    /// Label for the filter widgets.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Item => "Item(s)",
            Dimension::Distributor => "Distributor(s)",
            Dimension::State => "State(s)",
        }
    }

    pub fn value_of(self, record: &Record) -> &str {
        match self {
            Dimension::Item => &record.item_name,
            Dimension::Distributor => &record.distributor,
            Dimension::State => &record.state,
        }
    }

    /// Every value observed in the dataset for this dimension.
    pub fn universe(self, dataset: &SalesDataset) -> &BTreeSet<String> {
        match self {
            Dimension::Item => &dataset.items,
            Dimension::Distributor => &dataset.distributors,
            Dimension::State => &dataset.states,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// FilterSelection
// ---------------------------------------------------------------------------

/// Allowed values per dimension plus an inclusive year range.
///
/// An empty set selects nothing; "select all" means the set holds the whole
/// universe, never an implicit wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub items: BTreeSet<String>,
    pub distributors: BTreeSet<String>,
    pub states: BTreeSet<String>,
    /// Inclusive `(min_year, max_year)`.
    pub years: (i32, i32),
}

impl FilterSelection {
    /// Everything selected: the default when a dataset is loaded.
    pub fn select_all(dataset: &SalesDataset) -> Self {
        Self {
            items: dataset.items.clone(),
            distributors: dataset.distributors.clone(),
            states: dataset.states.clone(),
            years: dataset.year_bounds.unwrap_or((0, 0)),
        }
    }

    pub fn values(&self, dim: Dimension) -> &BTreeSet<String> {
        match dim {
            Dimension::Item => &self.items,
            Dimension::Distributor => &self.distributors,
            Dimension::State => &self.states,
        }
    }

    pub fn values_mut(&mut self, dim: Dimension) -> &mut BTreeSet<String> {
        match dim {
            Dimension::Item => &mut self.items,
            Dimension::Distributor => &mut self.distributors,
            Dimension::State => &mut self.states,
        }
    }

    /// Toggle a single value in a dimension's selection.
    pub fn toggle(&mut self, dim: Dimension, value: &str) {
        let selected = self.values_mut(dim);
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
    }

    pub fn select_all_in(&mut self, dim: Dimension, dataset: &SalesDataset) {
        *self.values_mut(dim) = dim.universe(dataset).clone();
    }

    pub fn select_none_in(&mut self, dim: Dimension) {
        self.values_mut(dim).clear();
    }

    /// Whether every observed value of `dim` is selected.
    pub fn is_all_selected(&self, dim: Dimension, dataset: &SalesDataset) -> bool {
        dim.universe(dataset).is_subset(self.values(dim))
    }

    /// Set the year range, swapping the bounds if given out of order.
    pub fn set_years(&mut self, from: i32, to: i32) {
        self.years = (from.min(to), from.max(to));
    }

    pub fn matches(&self, record: &Record) -> bool {
        let (min_year, max_year) = self.years;
        Dimension::ALL
            .iter()
            .all(|&dim| self.values(dim).contains(dim.value_of(record)))
            && (min_year..=max_year).contains(&record.year)
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return indices of records passing every predicate, in input order.
pub fn filtered_indices(records: &[Record], selection: &FilterSelection) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

/// Borrow the records at `indices`.
pub fn pick<'a>(records: &'a [Record], indices: &[usize]) -> Vec<&'a Record> {
    indices.iter().filter_map(|&i| records.get(i)).collect()
}
